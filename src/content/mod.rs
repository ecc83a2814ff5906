//! Content module - projects, experience, certifications and tech stack records

mod lenient;
mod project;
mod records;
pub mod seed;

pub use project::{ContentBlock, Narrative, Project, ProjectBody};
pub use records::{Certification, ExperienceEntry, TechStackCategory};

use serde::{Deserialize, Serialize};

/// Every collection the site renders, as persisted in `db.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collections {
    #[serde(deserialize_with = "lenient::vec_or_null")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient::vec_or_null")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "lenient::vec_or_null")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "lenient::vec_or_null")]
    pub tech_stack: Vec<TechStackCategory>,
}

impl Collections {
    /// Position of the project with the given id
    pub fn project_index(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }
}
