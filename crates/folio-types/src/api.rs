use serde::{Deserialize, Serialize};

/// HTTP paths served by the site.
pub mod endpoints {
    pub const HOME: &str = "/";
    pub const CONTACT: &str = "/contact";
    pub const PROJECTS_PAGE: &str = "/projects";
    pub const ABOUT_PAGE: &str = "/about";

    pub const API_PREFIX: &str = "/api/v1";
    pub const PORTFOLIO: &str = "/api/v1/portfolio";
    pub const SKILLS: &str = "/api/v1/skills";
    pub const PROJECTS: &str = "/api/v1/projects";
    pub const PROJECT_BY_ID: &str = "/api/v1/projects/:id";
    pub const EXPERIENCES: &str = "/api/v1/experiences";
    pub const HEALTH: &str = "/api/v1/health";

    /// Where a successful contact submission lands.
    pub const CONTACT_ANCHOR: &str = "/#contact";
}

/// Health check response.
///
/// The payload is fixed: it does not reflect any runtime state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "UP".into(),
            service: "portfolio-api".into(),
            version: "1.0.0".into(),
        }
    }
}
