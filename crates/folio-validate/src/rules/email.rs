use std::sync::LazyLock;

use regex::Regex;

use crate::rule::{FieldRule, RuleDecision};

// local@domain.tld, no whitespace, exactly one '@'.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Checks that a value looks like an email address.
///
/// Empty values pass; pair this with [`crate::RequiredRule`] to make the
/// field mandatory.
pub struct EmailRule {
    field: String,
}

impl EmailRule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// Returns `true` if `value` has the shape `local@domain.tld`.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

impl FieldRule for EmailRule {
    fn name(&self) -> &str {
        "email"
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, value: &str) -> RuleDecision {
        let value = value.trim();
        if value.is_empty() || is_email(value) {
            RuleDecision::Pass
        } else {
            RuleDecision::fail("Please provide a valid email address")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for addr in ["john@example.com", "a.b+tag@mail.example.co.uk", "x@y.z"] {
            assert!(is_email(addr), "{addr}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for addr in [
            "invalid-email",
            "no-at.example.com",
            "nodot@example",
            "two@@example.com",
            "a@b@c.com",
            "spa ce@example.com",
            "@example.com",
            "user@.",
        ] {
            assert!(!is_email(addr), "{addr}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(EmailRule::new("email").check("  john@example.com ").is_pass());
    }

    #[test]
    fn empty_passes_to_leave_presence_to_required() {
        assert!(EmailRule::new("email").check("").is_pass());
    }
}
