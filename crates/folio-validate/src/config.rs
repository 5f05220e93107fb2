use serde::{Deserialize, Serialize};

use crate::error::ValidateError;

/// Length thresholds for contact form fields.
///
/// Lengths are counted in characters after trimming surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Longest accepted name.
    pub name_max_len: usize,
    /// Shortest accepted subject.
    pub subject_min_len: usize,
    /// Longest accepted subject.
    pub subject_max_len: usize,
    /// Shortest accepted message.
    pub message_min_len: usize,
    /// Longest accepted message.
    pub message_max_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_max_len: 100,
            subject_min_len: 5,
            subject_max_len: 200,
            message_min_len: 10,
            message_max_len: 5000,
        }
    }
}

impl ValidationConfig {
    /// Check that every minimum is no larger than its maximum.
    pub fn check(&self) -> Result<(), ValidateError> {
        if self.name_max_len == 0 {
            return Err(ValidateError::Config("name_max_len must be positive".into()));
        }
        if self.subject_min_len > self.subject_max_len {
            return Err(ValidateError::Config(format!(
                "subject_min_len ({}) exceeds subject_max_len ({})",
                self.subject_min_len, self.subject_max_len
            )));
        }
        if self.message_min_len > self.message_max_len {
            return Err(ValidateError::Config(format!(
                "message_min_len ({}) exceeds message_max_len ({})",
                self.message_min_len, self.message_max_len
            )));
        }
        Ok(())
    }
}
