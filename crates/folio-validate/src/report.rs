use std::collections::BTreeMap;

/// Field-level outcome of validating one contact form.
///
/// Holds at most one message per field. An empty report means the form
/// is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    /// Returns `true` if no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for `field`, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Names of the failing fields, sorted.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a failure unless the field already has one.
    pub(crate) fn reject(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_insert(message);
    }
}
