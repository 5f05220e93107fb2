/// Errors that can occur while running the validator itself.
///
/// A form failing its rules is not an error; it is reported through
/// [`crate::ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    /// A rule refers to a field the contact form does not have.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// Thresholds are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}
