//! File-backed store: all collections in one JSON document

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::{
    drop_duplicate_projects, insert_project, remove_project, replace_project, ContentStore,
    StoreError,
};
use crate::content::{Certification, Collections, ExperienceEntry, Project, TechStackCategory};

/// Collections kept in memory and written back to `db.json` after each change
pub struct JsonStore {
    path: PathBuf,
    data: RwLock<Collections>,
}

impl JsonStore {
    /// Open the store at `path`. A missing file starts an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let mut data = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                StoreError::Unavailable(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str::<Collections>(&content).map_err(|e| {
                StoreError::Unavailable(format!("failed to parse {}: {}", path.display(), e))
            })?
        } else {
            tracing::info!("No data file at {:?}, starting with an empty store", path);
            Collections::default()
        };
        drop_duplicate_projects(&mut data);

        tracing::info!(
            "Loaded {} projects, {} experience entries, {} certifications, {} stack categories from {:?}",
            data.projects.len(),
            data.experience.len(),
            data.certifications.len(),
            data.tech_stack.len(),
            path
        );

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `collections` to `path` through a temporary file and a rename
    pub fn write_collections(path: &Path, collections: &Collections) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(collections)
            .map_err(|e| StoreError::Unavailable(format!("failed to encode collections: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| {
            StoreError::Unavailable(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Unavailable(format!(
                "failed to replace {}: {}",
                path.display(),
                e
            )));
        }

        tracing::debug!("Saved collections to {:?}", path);
        Ok(())
    }

    /// Apply `change` to a copy of the collections, persist it, then publish it.
    /// The in-memory state only moves once the file has been written.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Collections) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.data.write().await;
        let mut next = guard.clone();
        let out = change(&mut next)?;

        let path = self.path.clone();
        let snapshot = next.clone();
        tokio::task::spawn_blocking(move || Self::write_collections(&path, &snapshot))
            .await
            .map_err(|e| StoreError::Unavailable(format!("store writer failed: {}", e)))??;

        *guard = next;
        Ok(out)
    }
}

#[async_trait]
impl ContentStore for JsonStore {
    fn backend_tag(&self) -> &'static str {
        "json"
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.data.read().await.projects.clone())
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceEntry>, StoreError> {
        Ok(self.data.read().await.experience.clone())
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, StoreError> {
        Ok(self.data.read().await.certifications.clone())
    }

    async fn list_tech_stack(&self) -> Result<Vec<TechStackCategory>, StoreError> {
        Ok(self.data.read().await.tech_stack.clone())
    }

    async fn create_project(&self, project: Project) -> Result<Project, StoreError> {
        let id = project.id.clone();
        let created = self.mutate(|c| insert_project(c, project)).await?;
        tracing::info!("Created project {}", id);
        Ok(created)
    }

    async fn update_project(&self, project: Project) -> Result<Project, StoreError> {
        let id = project.id.clone();
        let updated = self.mutate(|c| replace_project(c, project)).await?;
        tracing::info!("Updated project {}", id);
        Ok(updated)
    }

    async fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        self.mutate(|c| remove_project(c, id)).await?;
        tracing::info!("Deleted project {}", id);
        Ok(())
    }
}
