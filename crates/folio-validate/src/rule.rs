use folio_types::ContactForm;

use crate::error::ValidateError;

// ---------------------------------------------------------------------------
// RuleDecision
// ---------------------------------------------------------------------------

/// The outcome of a single rule check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleDecision {
    /// The field satisfies the rule.
    Pass,
    /// The field violates the rule; `message` is shown next to the input.
    Fail { message: String },
}

impl RuleDecision {
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail {
            message: message.into(),
        }
    }

    /// Returns `true` if the decision is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ---------------------------------------------------------------------------
// FieldRule
// ---------------------------------------------------------------------------

/// A check applied to one contact form field.
pub trait FieldRule: Send + Sync {
    /// Short rule name, used in logs and errors.
    fn name(&self) -> &str;

    /// The form field this rule inspects.
    fn field(&self) -> &str;

    /// Check the field's value.
    fn check(&self, value: &str) -> RuleDecision;

    /// Look up the field on `form` and check it.
    fn evaluate(&self, form: &ContactForm) -> Result<RuleDecision, ValidateError> {
        let value = form
            .field(self.field())
            .ok_or_else(|| ValidateError::UnknownField(self.field().to_string()))?;
        Ok(self.check(value))
    }
}

/// Display label for a form field ("subject" -> "Subject").
pub(crate) fn field_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
