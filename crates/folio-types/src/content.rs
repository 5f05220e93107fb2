use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A skill category with the technologies grouped under it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Grouping label (e.g. "Languages", "Cloud & DevOps").
    pub category: String,
    /// Glyph shown next to the category.
    pub icon: String,
    /// Technologies in display order.
    pub technologies: Vec<String>,
}

impl Skill {
    pub fn new<I, S>(category: impl Into<String>, icon: impl Into<String>, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            icon: icon.into(),
            technologies: technologies.into_iter().map(Into::into).collect(),
        }
    }
}

/// A showcased project.
///
/// `id` is the only field carrying a uniqueness requirement; the content
/// store rejects duplicate ids when it is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable lookup key used by `/api/v1/projects/{id}`.
    pub id: String,
    pub title: String,
    /// Category of project (e.g. "Microservice", "Machine Learning").
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    /// Live demo link, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub icon: String,
    /// Key features, in display order.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Project {
    /// Returns `true` if the project has a live demo link.
    pub fn has_demo(&self) -> bool {
        self.demo_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

/// Kind of timeline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceType {
    Work,
    Education,
    Other,
}

impl ExperienceType {
    /// Human-readable label for page rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Lowercase slug, used as a CSS class on the timeline.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => write!(f, "WORK"),
            Self::Education => write!(f, "EDUCATION"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

impl FromStr for ExperienceType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WORK" => Ok(Self::Work),
            "EDUCATION" => Ok(Self::Education),
            "OTHER" => Ok(Self::Other),
            _ => Err(TypeError::UnknownExperienceType(s.to_string())),
        }
    }
}

/// A timeline entry: a job, a degree, or anything else worth listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Free-text period (e.g. "2023 — Expected 2025", "Current").
    pub date_range: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
}

impl Experience {
    pub fn new(
        date_range: impl Into<String>,
        title: impl Into<String>,
        organization: impl Into<String>,
        description: impl Into<String>,
        kind: ExperienceType,
    ) -> Self {
        Self {
            date_range: date_range.into(),
            title: title.into(),
            organization: organization.into(),
            description: description.into(),
            kind,
        }
    }
}
