//! HTML templates.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time templating. All
//! dynamic text is escaped by maud, including values echoed back into the
//! contact form.

use folio_types::{endpoints, ContactForm, Experience, Profile, Project, Skill};
use folio_validate::ValidationReport;
use maud::{html, Markup, DOCTYPE};

use crate::pages::{AboutView, HomeView, ProjectsView};

const CSS: &str = include_str!("../static/style.css");

// ============================================================================
// Layout
// ============================================================================

fn base_document(title: &str, profile: &Profile, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content={ (profile.name) " - " (profile.title) };
                title { (title) }
                style { (CSS) }
            }
            body {
                (site_header(profile))
                main { (content) }
                (site_footer(profile))
            }
        }
    }
}

fn site_header(profile: &Profile) -> Markup {
    html! {
        header.site-header {
            a.brand href=(endpoints::HOME) { (profile.name) }
            nav.site-nav {
                a href=(endpoints::HOME) { "Home" }
                a href=(endpoints::PROJECTS_PAGE) { "Projects" }
                a href=(endpoints::ABOUT_PAGE) { "About" }
                a href=(endpoints::CONTACT_ANCHOR) { "Contact" }
            }
        }
    }
}

fn site_footer(profile: &Profile) -> Markup {
    html! {
        footer.site-footer {
            a href=(profile.github) target="_blank" rel="noopener" { "GitHub" }
            a href=(profile.linkedin) target="_blank" rel="noopener" { "LinkedIn" }
            a href={ "mailto:" (profile.email) } { (profile.email) }
            p { (profile.location) }
        }
    }
}

// ============================================================================
// Components
// ============================================================================

fn skills_section(skills: &[Skill]) -> Markup {
    html! {
        section #skills.skills {
            h2 { "Skills" }
            div.skill-grid {
                @for skill in skills {
                    div.skill-card {
                        span.icon { (skill.icon) }
                        h3 { (skill.category) }
                        ul.tags {
                            @for tech in &skill.technologies {
                                li { (tech) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.project-card id=(project.id) {
            header {
                span.icon { (project.icon) }
                span.project-type { (project.kind) }
            }
            h3 { (project.title) }
            p { (project.description) }
            @if !project.highlights.is_empty() {
                ul.highlights {
                    @for highlight in &project.highlights {
                        li { (highlight) }
                    }
                }
            }
            ul.tags {
                @for tech in &project.technologies {
                    li { (tech) }
                }
            }
            div.links {
                a href=(project.github_url) target="_blank" rel="noopener" { "Source" }
                @if project.has_demo() {
                    a href=[project.demo_url.as_deref()] target="_blank" rel="noopener" { "Live demo" }
                }
            }
        }
    }
}

fn projects_section(projects: &[Project]) -> Markup {
    html! {
        section #projects.projects {
            h2 { "Projects" }
            div.project-grid {
                @for project in projects {
                    (project_card(project))
                }
            }
        }
    }
}

fn experience_section(experiences: &[Experience]) -> Markup {
    html! {
        section #experience.timeline {
            h2 { "Experience" }
            ol {
                @for entry in experiences {
                    li class={ "timeline-entry " (entry.kind.slug()) } {
                        span.date { (entry.date_range) }
                        h3 { (entry.title) }
                        p.organization { (entry.organization) " · " (entry.kind.label()) }
                        p { (entry.description) }
                    }
                }
            }
        }
    }
}

fn field_error(errors: &ValidationReport, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.error_for(field) {
            span.field-error id={ (field) "-error" } { (message) }
        }
    }
}

fn contact_section(form: &ContactForm, errors: &ValidationReport, flash: Option<&str>) -> Markup {
    html! {
        section #contact.contact {
            h2 { "Get in touch" }
            @if let Some(message) = flash {
                p.flash.success role="status" { (message) }
            }
            @if !errors.is_valid() {
                p.flash.error role="alert" { "Please correct the highlighted fields." }
            }
            form method="post" action=(endpoints::CONTACT) novalidate {
                div.form-group.has-error[errors.has_error(ContactForm::NAME)] {
                    label for="name" { "Name" }
                    input #name type="text" name="name" value=(form.name);
                    (field_error(errors, ContactForm::NAME))
                }
                div.form-group.has-error[errors.has_error(ContactForm::EMAIL)] {
                    label for="email" { "Email" }
                    input #email type="email" name="email" value=(form.email);
                    (field_error(errors, ContactForm::EMAIL))
                }
                div.form-group.has-error[errors.has_error(ContactForm::SUBJECT)] {
                    label for="subject" { "Subject" }
                    input #subject type="text" name="subject" value=(form.subject);
                    (field_error(errors, ContactForm::SUBJECT))
                }
                div.form-group.has-error[errors.has_error(ContactForm::MESSAGE)] {
                    label for="message" { "Message" }
                    textarea #message name="message" rows="6" { (form.message) }
                    (field_error(errors, ContactForm::MESSAGE))
                }
                button type="submit" { "Send message" }
            }
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

pub fn home_page(view: &HomeView<'_>) -> Markup {
    let profile = view.profile;
    let content = html! {
        section.hero {
            h1 { (profile.name) }
            p.title { (profile.title) }
            p.location { (profile.location) }
            div.links {
                a href=(profile.github) target="_blank" rel="noopener" { "GitHub" }
                a href=(profile.linkedin) target="_blank" rel="noopener" { "LinkedIn" }
                a href=(endpoints::CONTACT_ANCHOR) { "Contact me" }
            }
        }
        (skills_section(view.skills))
        (projects_section(view.projects))
        (experience_section(view.experiences))
        (contact_section(&view.form, &view.errors, view.flash.map(|f| f.message())))
    };
    base_document(&format!("{} | {}", profile.name, profile.title), profile, content)
}

pub fn projects_page(view: &ProjectsView<'_>) -> Markup {
    base_document(
        &format!("Projects | {}", view.profile.name),
        view.profile,
        projects_section(view.projects),
    )
}

pub fn about_page(view: &AboutView<'_>) -> Markup {
    let content = html! {
        section.about {
            h1 { "About " (view.profile.name) }
            p { (view.profile.title) " based in " (view.profile.location) "." }
        }
        (skills_section(view.skills))
        (experience_section(view.experiences))
    };
    base_document(&format!("About | {}", view.profile.name), view.profile, content)
}

pub fn not_found_page(profile: &Profile, path: &str) -> Markup {
    let content = html! {
        section.not-found {
            h1 { "Page not found" }
            p { "Nothing lives at " code { (path) } "." }
            a href=(endpoints::HOME) { "Back home" }
        }
    };
    base_document("Not found", profile, content)
}
