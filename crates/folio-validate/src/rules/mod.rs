//! Built-in field rules.

pub mod email;
pub mod length;
pub mod required;

pub use email::EmailRule;
pub use length::LengthRule;
pub use required::RequiredRule;
