//! Error types for content store construction.

use thiserror::Error;

/// Errors that can occur while building a content store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two projects share the same id.
    #[error("duplicate project id: {id}")]
    DuplicateProjectId { id: String },

    /// A project id cannot be used as a URL path segment.
    #[error("invalid project id: {id:?}: {reason}")]
    InvalidProjectId { id: String, reason: String },
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
