use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("store error: {0}")]
    Store(#[from] folio_store::StoreError),

    #[error("validation error: {0}")]
    Validate(#[from] folio_validate::ValidateError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ProjectNotFound(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::NOT_FOUND {
            json!({ "error": "not_found", "message": self.to_string() })
        } else {
            tracing::error!(error = %self, "request failed");
            json!({ "error": "internal", "message": "internal server error" })
        };
        (status, Json(body)).into_response()
    }
}
