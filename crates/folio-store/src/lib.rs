//! Content store for the portfolio site.
//!
//! Skills, projects, and experiences are built once at startup and never
//! change afterwards. Handlers share the store read-only.
//!
//! # Modules
//!
//! - [`error`] — Error types for store construction
//! - [`traits`] — The [`ContentStore`] read interface
//! - [`names`] — Project id validation
//! - [`memory`] — The immutable [`StaticContentStore`]
//! - [`embedded`] — The site's built-in content

pub mod embedded;
pub mod error;
pub mod memory;
pub mod names;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::StaticContentStore;
pub use names::validate_project_id;
pub use traits::ContentStore;
