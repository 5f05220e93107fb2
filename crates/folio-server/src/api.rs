//! JSON API handlers under `/api/v1`.
//!
//! All list endpoints return content in declaration order. Nothing here
//! mutates state, so repeated calls return identical bodies.

use axum::extract::{Path, State};
use axum::response::Json;

use folio_types::{endpoints, Experience, HealthStatus, Portfolio, Project, Skill};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Profile fields plus all three content lists.
pub fn portfolio(state: &AppState) -> Portfolio {
    Portfolio {
        profile: state.profile.as_ref().clone(),
        skills: state.store.skills().to_vec(),
        projects: state.store.projects().to_vec(),
        experiences: state.store.experiences().to_vec(),
    }
}

pub async fn portfolio_handler(State(state): State<AppState>) -> Json<Portfolio> {
    tracing::info!(endpoint = endpoints::PORTFOLIO, "api request");
    Json(portfolio(&state))
}

pub async fn skills_handler(State(state): State<AppState>) -> Json<Vec<Skill>> {
    tracing::info!(endpoint = endpoints::SKILLS, "api request");
    Json(state.store.skills().to_vec())
}

pub async fn projects_handler(State(state): State<AppState>) -> Json<Vec<Project>> {
    tracing::info!(endpoint = endpoints::PROJECTS, "api request");
    Json(state.store.projects().to_vec())
}

pub async fn project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<Project>> {
    tracing::info!(endpoint = endpoints::PROJECT_BY_ID, %id, "api request");
    state
        .store
        .project(&id)
        .cloned()
        .map(Json)
        .ok_or(ServerError::ProjectNotFound(id))
}

pub async fn experiences_handler(State(state): State<AppState>) -> Json<Vec<Experience>> {
    tracing::info!(endpoint = endpoints::EXPERIENCES, "api request");
    Json(state.store.experiences().to_vec())
}

/// Fixed liveness payload.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::default())
}
