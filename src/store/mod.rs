//! Content store
//!
//! The page-rendering path only ever reads from a store; project writes come
//! from the admin panel and are serialized by the store implementation.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

use crate::content::{Certification, Collections, ExperienceEntry, Project, TechStackCategory};

/// Errors reported by a content store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed
    #[error("content store unavailable: {0}")]
    Unavailable(String),

    #[error("a project with id `{0}` already exists")]
    DuplicateIdentifier(String),

    #[error("no project with id `{0}`")]
    NotFound(String),
}

/// Read and project-write access to the site's collections
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Short name of the backend, for logs
    fn backend_tag(&self) -> &'static str;

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn list_experience(&self) -> Result<Vec<ExperienceEntry>, StoreError>;

    async fn list_certifications(&self) -> Result<Vec<Certification>, StoreError>;

    async fn list_tech_stack(&self) -> Result<Vec<TechStackCategory>, StoreError>;

    /// Look up a single project by id
    async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        self.list_projects()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Append a project; fails if the id is already taken
    async fn create_project(&self, project: Project) -> Result<Project, StoreError>;

    /// Replace the project with the same id, keeping its position
    async fn update_project(&self, project: Project) -> Result<Project, StoreError>;

    async fn delete_project(&self, id: &str) -> Result<(), StoreError>;
}

/// Keep the first project for each id; later ones are dropped with a warning
pub(crate) fn drop_duplicate_projects(collections: &mut Collections) {
    let mut seen = HashSet::new();
    collections.projects.retain(|p| {
        let first = seen.insert(p.id.clone());
        if !first {
            tracing::warn!("Ignoring project {:?}: its id is already used", p.id);
        }
        first
    });
}

/// Append `project` unless its id is taken. `collections` is untouched on error.
pub(crate) fn insert_project(
    collections: &mut Collections,
    project: Project,
) -> Result<Project, StoreError> {
    if collections.project_index(&project.id).is_some() {
        return Err(StoreError::DuplicateIdentifier(project.id));
    }
    collections.projects.push(project.clone());
    Ok(project)
}

pub(crate) fn replace_project(
    collections: &mut Collections,
    project: Project,
) -> Result<Project, StoreError> {
    let index = collections
        .project_index(&project.id)
        .ok_or_else(|| StoreError::NotFound(project.id.clone()))?;
    collections.projects[index] = project.clone();
    Ok(project)
}

pub(crate) fn remove_project(collections: &mut Collections, id: &str) -> Result<(), StoreError> {
    let index = collections
        .project_index(id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    collections.projects.remove(index);
    Ok(())
}
