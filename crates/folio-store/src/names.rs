//! Project id validation.
//!
//! Project ids appear in `/api/v1/projects/{id}`, so they are restricted
//! to URL-safe slugs:
//! - Must be non-empty
//! - Only lowercase ASCII letters, digits, and `-`
//! - Must not start or end with `-`
//! - Must not contain `--`

use crate::error::{Result, StoreError};

/// Validate a project id, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use folio_store::names::validate_project_id;
///
/// assert!(validate_project_id("qr-code-generator").is_ok());
/// assert!(validate_project_id("").is_err());
/// assert!(validate_project_id("Bad Id").is_err());
/// ```
pub fn validate_project_id(id: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(StoreError::InvalidProjectId {
            id: id.to_string(),
            reason: reason.to_string(),
        })
    };

    if id.is_empty() {
        return invalid("must not be empty");
    }

    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return invalid(&format!("contains forbidden character {c:?}"));
    }

    if id.starts_with('-') || id.ends_with('-') {
        return invalid("must not start or end with '-'");
    }

    if id.contains("--") {
        return invalid("must not contain '--'");
    }

    Ok(())
}
