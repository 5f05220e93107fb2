//! Page rendering contexts.
//!
//! Each view gathers exactly the data one HTML page needs. Views borrow
//! from [`AppState`]; building one never copies the content lists.

use folio_types::{endpoints, ContactForm, Experience, Profile, Project, Skill};
use folio_validate::ValidationReport;

use crate::error::ServerResult;
use crate::flash::Flash;
use crate::state::AppState;

/// Everything the home page shows.
pub struct HomeView<'a> {
    pub profile: &'a Profile,
    pub skills: &'a [Skill],
    pub projects: &'a [Project],
    pub experiences: &'a [Experience],
    /// Values shown in the contact form inputs.
    pub form: ContactForm,
    /// Per-field errors from a rejected submission.
    pub errors: ValidationReport,
    pub flash: Option<Flash>,
}

pub struct ProjectsView<'a> {
    pub profile: &'a Profile,
    pub projects: &'a [Project],
}

pub struct AboutView<'a> {
    pub profile: &'a Profile,
    pub skills: &'a [Skill],
    pub experiences: &'a [Experience],
}

/// Result of a contact form submission.
pub enum ContactOutcome<'a> {
    /// Re-render the home page in place with the errors.
    Invalid(HomeView<'a>),
    /// Redirect to `location` carrying `flash`.
    Accepted { location: &'static str, flash: Flash },
}

/// Home page with an empty contact form.
pub fn render_home(state: &AppState, flash: Option<Flash>) -> HomeView<'_> {
    tracing::info!(flash = flash.is_some(), "loading portfolio homepage");
    home_view(state, ContactForm::default(), ValidationReport::default(), flash)
}

fn home_view(
    state: &AppState,
    form: ContactForm,
    errors: ValidationReport,
    flash: Option<Flash>,
) -> HomeView<'_> {
    HomeView {
        profile: &state.profile,
        skills: state.store.skills(),
        projects: state.store.projects(),
        experiences: state.store.experiences(),
        form,
        errors,
        flash,
    }
}

/// Validate a submission.
///
/// Nothing is persisted or sent: an accepted submission is logged and the
/// visitor is sent back to the contact section.
pub fn submit_contact(state: &AppState, form: ContactForm) -> ServerResult<ContactOutcome<'_>> {
    let report = state.validator.validate(&form)?;

    if !report.is_valid() {
        tracing::warn!(fields = ?report.fields(), "contact form validation failed");
        return Ok(ContactOutcome::Invalid(home_view(state, form, report, None)));
    }

    tracing::info!(
        name = %form.name,
        email = %form.email,
        subject = %form.subject,
        "contact form submitted"
    );

    Ok(ContactOutcome::Accepted {
        location: endpoints::CONTACT_ANCHOR,
        flash: Flash::ContactSent,
    })
}

pub fn render_projects(state: &AppState) -> ProjectsView<'_> {
    tracing::info!("loading projects page");
    ProjectsView {
        profile: &state.profile,
        projects: state.store.projects(),
    }
}

pub fn render_about(state: &AppState) -> AboutView<'_> {
    tracing::info!("loading about page");
    AboutView {
        profile: &state.profile,
        skills: state.store.skills(),
        experiences: state.store.experiences(),
    }
}
