//! In-process store for tests and ephemeral servers

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::{insert_project, remove_project, replace_project, ContentStore, StoreError};
use crate::content::{Certification, Collections, ExperienceEntry, Project, TechStackCategory};

#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new(collections: Collections) -> Self {
        Self {
            data: RwLock::new(collections),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.check()?;
        Ok(self.data.read().await.projects.clone())
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceEntry>, StoreError> {
        self.check()?;
        Ok(self.data.read().await.experience.clone())
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, StoreError> {
        self.check()?;
        Ok(self.data.read().await.certifications.clone())
    }

    async fn list_tech_stack(&self) -> Result<Vec<TechStackCategory>, StoreError> {
        self.check()?;
        Ok(self.data.read().await.tech_stack.clone())
    }

    async fn create_project(&self, project: Project) -> Result<Project, StoreError> {
        self.check()?;
        insert_project(&mut *self.data.write().await, project)
    }

    async fn update_project(&self, project: Project) -> Result<Project, StoreError> {
        self.check()?;
        replace_project(&mut *self.data.write().await, project)
    }

    async fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        self.check()?;
        remove_project(&mut *self.data.write().await, id)
    }
}
