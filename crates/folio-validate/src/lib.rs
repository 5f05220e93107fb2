//! Contact form validation for the portfolio site.
//!
//! Every submission runs through an ordered list of field rules. Unlike a
//! fail-fast pipeline, all fields are checked and every failure is reported
//! together so the visitor can fix the whole form in one go.
//!
//! # Quick Start
//!
//! ```rust
//! use folio_types::ContactForm;
//! use folio_validate::{ContactValidator, ValidationConfig};
//!
//! let validator = ContactValidator::standard(ValidationConfig::default()).unwrap();
//! let form = ContactForm::new("", "invalid-email", "Hi", "Short");
//! let report = validator.validate(&form).unwrap();
//! assert!(!report.is_valid());
//! assert_eq!(report.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod rule;
pub mod rules;
pub mod validator;

pub use config::ValidationConfig;
pub use error::ValidateError;
pub use report::ValidationReport;
pub use rule::{FieldRule, RuleDecision};
pub use rules::email::is_email;
pub use rules::{EmailRule, LengthRule, RequiredRule};
pub use validator::ContactValidator;
