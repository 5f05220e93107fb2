use crate::rule::{field_label, FieldRule, RuleDecision};

/// Rejects empty or whitespace-only values.
pub struct RequiredRule {
    field: String,
}

impl RequiredRule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldRule for RequiredRule {
    fn name(&self) -> &str {
        "required"
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: &str) -> RuleDecision {
        if value.trim().is_empty() {
            return RuleDecision::fail(format!("{} is required", field_label(&self.field)));
        }
        RuleDecision::Pass
    }
}
