//! The [`ContentStore`] trait defining read access to portfolio content.
//!
//! Content is fixed once the store is built. Implementations hand out
//! borrowed slices, so any number of concurrent requests can read without
//! locking.

use folio_types::{Experience, Project, Skill};

/// Read-only access to the three portfolio content lists.
pub trait ContentStore: Send + Sync {
    /// Skill categories in declaration order.
    fn skills(&self) -> &[Skill];

    /// Projects in declaration order.
    fn projects(&self) -> &[Project];

    /// Timeline entries in declaration order.
    fn experiences(&self) -> &[Experience];

    /// Look up a project by id.
    ///
    /// Returns the first match, or `None` if no project has this id.
    fn project(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.id == id)
    }
}
