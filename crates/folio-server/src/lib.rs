//! HTTP server for the portfolio site.
//!
//! Serves three HTML pages and a contact form rendered with maud, plus a
//! read-only JSON API under `/api/v1`. All content comes from an immutable
//! [`folio_store::ContentStore`] shared across requests without locking.

pub mod api;
pub mod config;
pub mod error;
pub mod flash;
pub mod handler;
pub mod pages;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use flash::Flash;
pub use pages::{AboutView, ContactOutcome, HomeView, ProjectsView};
pub use router::build_router;
pub use server::PortfolioServer;
pub use state::AppState;
