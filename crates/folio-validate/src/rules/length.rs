use crate::rule::{field_label, FieldRule, RuleDecision};

/// Bounds the trimmed character count of a field.
pub struct LengthRule {
    field: String,
    min: usize,
    max: usize,
}

impl LengthRule {
    pub fn new(field: impl Into<String>, min: usize, max: usize) -> Self {
        Self {
            field: field.into(),
            min,
            max,
        }
    }

    fn message(&self) -> String {
        let label = field_label(&self.field);
        if self.min == 0 {
            format!("{label} must be at most {} characters", self.max)
        } else {
            format!(
                "{label} must be between {} and {} characters",
                self.min, self.max
            )
        }
    }
}

impl FieldRule for LengthRule {
    fn name(&self) -> &str {
        "length"
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: &str) -> RuleDecision {
        let len = value.trim().chars().count();
        if len < self.min || len > self.max {
            return RuleDecision::fail(self.message());
        }
        RuleDecision::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let rule = LengthRule::new("subject", 5, 10);
        assert!(!rule.check("abcd").is_pass());
        assert!(rule.check("abcde").is_pass());
        assert!(rule.check("abcdefghij").is_pass());
        assert!(!rule.check("abcdefghijk").is_pass());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let rule = LengthRule::new("subject", 5, 5);
        assert!(rule.check("héllö").is_pass());
    }

    #[test]
    fn trims_before_counting() {
        let rule = LengthRule::new("message", 10, 100);
        assert!(!rule.check("   Short    ").is_pass());
    }

    #[test]
    fn messages_describe_bounds() {
        assert_eq!(
            LengthRule::new("subject", 5, 200).check("Hi"),
            RuleDecision::fail("Subject must be between 5 and 200 characters")
        );
        assert_eq!(
            LengthRule::new("name", 0, 3).check("Bobby"),
            RuleDecision::fail("Name must be at most 3 characters")
        );
    }
}
