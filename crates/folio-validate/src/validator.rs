use folio_types::ContactForm;

use crate::config::ValidationConfig;
use crate::error::ValidateError;
use crate::report::ValidationReport;
use crate::rule::{FieldRule, RuleDecision};
use crate::rules::{EmailRule, LengthRule, RequiredRule};

/// Runs an ordered list of field rules over a contact form.
///
/// Every rule is evaluated; failures are not fail-fast across fields, so
/// a single submission reports every broken field at once. Within a field
/// only the first failing rule is kept, and later rules for that field are
/// skipped.
pub struct ContactValidator {
    rules: Vec<Box<dyn FieldRule>>,
    config: ValidationConfig,
}

impl ContactValidator {
    /// Create a validator with no rules.
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create a validator with the standard contact form rules:
    ///
    /// - name: required, at most `name_max_len`
    /// - email: required, email shape
    /// - subject: required, `subject_min_len..=subject_max_len`
    /// - message: required, `message_min_len..=message_max_len`
    pub fn standard(config: ValidationConfig) -> Result<Self, ValidateError> {
        config.check()?;

        let mut validator = Self::new(config);
        let c = validator.config.clone();

        validator.add_rule(Box::new(RequiredRule::new(ContactForm::NAME)));
        validator.add_rule(Box::new(LengthRule::new(ContactForm::NAME, 0, c.name_max_len)));

        validator.add_rule(Box::new(RequiredRule::new(ContactForm::EMAIL)));
        validator.add_rule(Box::new(EmailRule::new(ContactForm::EMAIL)));

        validator.add_rule(Box::new(RequiredRule::new(ContactForm::SUBJECT)));
        validator.add_rule(Box::new(LengthRule::new(
            ContactForm::SUBJECT,
            c.subject_min_len,
            c.subject_max_len,
        )));

        validator.add_rule(Box::new(RequiredRule::new(ContactForm::MESSAGE)));
        validator.add_rule(Box::new(LengthRule::new(
            ContactForm::MESSAGE,
            c.message_min_len,
            c.message_max_len,
        )));

        Ok(validator)
    }

    /// Append a rule to the end of the pipeline.
    pub fn add_rule(&mut self, rule: Box<dyn FieldRule>) {
        self.rules.push(rule);
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Validate a form and collect every field failure.
    pub fn validate(&self, form: &ContactForm) -> Result<ValidationReport, ValidateError> {
        let mut report = ValidationReport::default();

        for rule in &self.rules {
            if report.has_error(rule.field()) {
                continue;
            }
            if let RuleDecision::Fail { message } = rule.evaluate(form)? {
                tracing::debug!(rule = rule.name(), field = rule.field(), %message, "rule failed");
                report.reject(rule.field(), message);
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ContactValidator {
        ContactValidator::standard(ValidationConfig::default()).unwrap()
    }

    fn valid_form() -> ContactForm {
        ContactForm::new(
            "John Doe",
            "john@example.com",
            "Job Opportunity",
            "I have a job opportunity for you!",
        )
    }

    #[test]
    fn standard_pipeline_has_eight_rules() {
        assert_eq!(validator().rule_count(), 8);
    }

    #[test]
    fn valid_form_passes() {
        let report = validator().validate(&valid_form()).unwrap();
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn all_invalid_fields_reported_together() {
        let form = ContactForm::new("", "invalid-email", "Hi", "Short");
        let report = validator().validate(&form).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.fields(), vec!["email", "message", "name", "subject"]);
    }

    #[test]
    fn only_broken_field_reported() {
        let mut form = valid_form();
        form.subject = "Hey".into();
        let report = validator().validate(&form).unwrap();
        assert_eq!(report.fields(), vec!["subject"]);
        assert_eq!(
            report.error_for("subject"),
            Some("Subject must be between 5 and 200 characters")
        );
    }

    #[test]
    fn first_failure_per_field_wins() {
        let mut form = valid_form();
        form.email = "   ".into();
        let report = validator().validate(&form).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.error_for("email"), Some("Email is required"));
    }

    #[test]
    fn thresholds_follow_config() {
        let config = ValidationConfig {
            subject_min_len: 2,
            message_min_len: 3,
            ..Default::default()
        };
        let v = ContactValidator::standard(config).unwrap();
        let form = ContactForm::new("Jo", "jo@example.com", "Hi", "Hey");
        assert!(v.validate(&form).unwrap().is_valid());
    }

    #[test]
    fn inconsistent_config_rejected() {
        let config = ValidationConfig {
            subject_min_len: 300,
            ..Default::default()
        };
        assert!(ContactValidator::standard(config).is_err());
    }

    #[test]
    fn custom_rule_integration() {
        struct NoSpamRule;
        impl FieldRule for NoSpamRule {
            fn name(&self) -> &str {
                "no-spam"
            }
            fn field(&self) -> &str {
                "message"
            }
            fn check(&self, value: &str) -> RuleDecision {
                if value.to_lowercase().contains("casino") {
                    RuleDecision::fail("Message looks like spam")
                } else {
                    RuleDecision::Pass
                }
            }
        }

        let mut v = validator();
        v.add_rule(Box::new(NoSpamRule));

        let mut form = valid_form();
        form.message = "Visit my casino website today".into();
        let report = v.validate(&form).unwrap();
        assert_eq!(report.error_for("message"), Some("Message looks like spam"));
    }

    #[test]
    fn empty_validator_accepts_anything() {
        let v = ContactValidator::new(ValidationConfig::default());
        assert!(v.validate(&ContactForm::default()).unwrap().is_valid());
    }
}
