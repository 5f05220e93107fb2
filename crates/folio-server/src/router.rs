use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use folio_types::endpoints;

use crate::state::AppState;
use crate::{api, handler};

/// Build the axum router with all site and API endpoints.
///
/// With `cors` set, the JSON API accepts cross-origin reads from any origin.
/// Pages are never CORS-enabled.
pub fn build_router(state: AppState, cors: bool) -> Router {
    let mut api_routes: Router<AppState> = Router::new()
        .route(endpoints::PORTFOLIO, get(api::portfolio_handler))
        .route(endpoints::SKILLS, get(api::skills_handler))
        .route(endpoints::PROJECTS, get(api::projects_handler))
        .route(endpoints::PROJECT_BY_ID, get(api::project_handler))
        .route(endpoints::EXPERIENCES, get(api::experiences_handler))
        .route(endpoints::HEALTH, get(api::health_handler));
    if cors {
        api_routes = api_routes.layer(CorsLayer::permissive());
    }

    Router::new()
        .route(endpoints::HOME, get(handler::home_handler))
        .route(endpoints::CONTACT, post(handler::contact_handler))
        .route(endpoints::PROJECTS_PAGE, get(handler::projects_handler))
        .route(endpoints::ABOUT_PAGE, get(handler::about_handler))
        .merge(api_routes)
        .fallback(handler::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
