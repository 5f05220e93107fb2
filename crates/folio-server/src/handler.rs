//! HTML page handlers.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};

use folio_types::{endpoints, ContactForm};

use crate::error::{ServerError, ServerResult};
use crate::flash::Flash;
use crate::pages::{self, ContactOutcome};
use crate::state::AppState;
use crate::templates;

/// `GET /`. Consumes a pending flash, if any.
pub async fn home_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let flash = Flash::from_headers(&headers);
    let markup = templates::home_page(&pages::render_home(&state, flash));
    if flash.is_some() {
        (AppendHeaders([(SET_COOKIE, Flash::clear_cookie())]), markup).into_response()
    } else {
        markup.into_response()
    }
}

/// `POST /contact`. A body that cannot be decoded is validated as an empty form.
pub async fn contact_handler(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> ServerResult<Response> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "undecodable contact submission");
            ContactForm::default()
        }
    };
    let response = match pages::submit_contact(&state, form)? {
        ContactOutcome::Invalid(view) => templates::home_page(&view).into_response(),
        ContactOutcome::Accepted { location, flash } => (
            AppendHeaders([(SET_COOKIE, flash.set_cookie())]),
            Redirect::to(location),
        )
            .into_response(),
    };
    Ok(response)
}

/// `GET /projects`.
pub async fn projects_handler(State(state): State<AppState>) -> Response {
    templates::projects_page(&pages::render_projects(&state)).into_response()
}

/// `GET /about`.
pub async fn about_handler(State(state): State<AppState>) -> Response {
    templates::about_page(&pages::render_about(&state)).into_response()
}

/// Unmatched routes: JSON under the API prefix, HTML elsewhere.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    tracing::debug!(%path, "no route");
    if path.starts_with(endpoints::API_PREFIX) {
        return ServerError::RouteNotFound(path.to_string()).into_response();
    }
    (
        StatusCode::NOT_FOUND,
        templates::not_found_page(&state.profile, path),
    )
        .into_response()
}
