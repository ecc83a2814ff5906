//! Admin panel operations on projects

mod auth;
mod form;

pub use auth::{parse_basic_auth, require_admin, Authenticator, StaticCredentials};
pub use form::{FormError, ProjectForm};

use thiserror::Error;

use crate::content::Project;
use crate::store::{ContentStore, StoreError};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] FormError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validate a submitted form and add the project
pub async fn create_project(
    store: &dyn ContentStore,
    form: &ProjectForm,
) -> Result<Project, AdminError> {
    let project = form.validate()?;
    let project = store.create_project(project).await?;
    tracing::debug!("Admin created project {}", project.id);
    Ok(project)
}

/// Validate a submitted form and replace the project `id` with it
pub async fn update_project(
    store: &dyn ContentStore,
    id: &str,
    form: &ProjectForm,
) -> Result<Project, AdminError> {
    let project = form.validate_for(id)?;
    let project = store.update_project(project).await?;
    tracing::debug!("Admin updated project {}", project.id);
    Ok(project)
}

pub async fn delete_project(store: &dyn ContentStore, id: &str) -> Result<(), AdminError> {
    store.delete_project(id).await?;
    tracing::debug!("Admin deleted project {}", id);
    Ok(())
}
