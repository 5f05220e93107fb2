//! Immutable in-memory content store.
//!
//! [`StaticContentStore`] owns three `Vec`s that are filled once at
//! construction and never touched again. Wrap it in an `Arc` to share it
//! across request handlers.

use std::collections::HashSet;

use folio_types::{Experience, Project, Skill};

use crate::embedded;
use crate::error::{Result, StoreError};
use crate::names::validate_project_id;
use crate::traits::ContentStore;

/// An immutable implementation of [`ContentStore`].
#[derive(Clone, Debug, Default)]
pub struct StaticContentStore {
    skills: Vec<Skill>,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
}

impl StaticContentStore {
    /// Build a store, checking that every project id is a valid slug and
    /// that no two projects share an id.
    pub fn new(
        skills: Vec<Skill>,
        projects: Vec<Project>,
        experiences: Vec<Experience>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            validate_project_id(&project.id)?;
            if !seen.insert(project.id.as_str()) {
                return Err(StoreError::DuplicateProjectId {
                    id: project.id.clone(),
                });
            }
        }

        tracing::debug!(
            skills = skills.len(),
            projects = projects.len(),
            experiences = experiences.len(),
            "content store built"
        );

        Ok(Self {
            skills,
            projects,
            experiences,
        })
    }

    /// The store populated with the site's built-in content.
    pub fn embedded() -> Result<Self> {
        Self::new(
            embedded::skills(),
            embedded::projects(),
            embedded::experiences(),
        )
    }
}

impl ContentStore for StaticContentStore {
    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn experiences(&self) -> &[Experience] {
        &self.experiences
    }
}
