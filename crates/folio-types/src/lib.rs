//! Foundation types for the portfolio site.
//!
//! This crate provides the content records served by the site and the
//! transient contact form submitted by visitors. Every other folio crate
//! depends on `folio-types`.
//!
//! # Key Types
//!
//! - [`Skill`] — Category label, glyph, and an ordered technology list
//! - [`Project`] — Showcased project; `id` is the lookup key
//! - [`Experience`] — Timeline entry tagged with an [`ExperienceType`]
//! - [`Profile`] — Fixed personal fields shown on every page
//! - [`Portfolio`] — Profile plus all three content lists, as served by the API
//! - [`ContactForm`] — One visitor submission, never persisted
//! - [`HealthStatus`] — Fixed liveness payload

pub mod api;
pub mod contact;
pub mod content;
pub mod error;
pub mod profile;

pub use api::{endpoints, HealthStatus};
pub use contact::ContactForm;
pub use content::{Experience, ExperienceType, Project, Skill};
pub use error::TypeError;
pub use profile::{Portfolio, Profile};
