use serde::{Deserialize, Serialize};

/// A contact form submission.
///
/// Lives for a single request: it is validated, logged, and dropped.
/// Missing form fields deserialize as empty strings so that validation,
/// not extraction, reports them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Look up a field value by its form name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            Self::NAME => Some(&self.name),
            Self::EMAIL => Some(&self.email),
            Self::SUBJECT => Some(&self.subject),
            Self::MESSAGE => Some(&self.message),
            _ => None,
        }
    }

    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";
    pub const SUBJECT: &'static str = "subject";
    pub const MESSAGE: &'static str = "message";

    /// All field names in form order.
    pub const FIELDS: [&'static str; 4] = [Self::NAME, Self::EMAIL, Self::SUBJECT, Self::MESSAGE];
}
