//! List store content

use anyhow::{bail, Result};

use crate::store::ContentStore;

/// List store content by type
pub async fn run(store: &dyn ContentStore, content_type: &str) -> Result<()> {
    match content_type {
        "project" | "projects" => {
            let projects = store.list_projects().await?;
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!(
                    "  {} - {} [{}, {} tags]",
                    project.id,
                    project.title,
                    project.body.shape(),
                    project.tags.len()
                );
            }
        }
        "experience" => {
            let entries = store.list_experience().await?;
            println!("Experience ({}):", entries.len());
            for entry in entries {
                println!("  {} - {} at {}", entry.year, entry.role, entry.company);
            }
        }
        "cert" | "certs" | "certification" | "certifications" => {
            let certifications = store.list_certifications().await?;
            println!("Certifications ({}):", certifications.len());
            for cert in certifications {
                println!("  {} - {} ({})", cert.year, cert.title, cert.issuer);
            }
        }
        "stack" | "tech-stack" => {
            let categories = store.list_tech_stack().await?;
            println!("Tech stack ({}):", categories.len());
            for category in categories {
                println!("  {}: {}", category.category, category.items.join(", "));
            }
        }
        other => {
            bail!(
                "Unknown type: {}. Available types: projects, experience, certifications, stack",
                other
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::seed;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_list_types() {
        let store = MemoryStore::new(seed::starter_collections());
        for kind in ["projects", "experience", "certifications", "stack"] {
            assert!(run(&store, kind).await.is_ok(), "{}", kind);
        }
        assert!(run(&store, "posts").await.is_err());
    }

    #[tokio::test]
    async fn test_list_propagates_store_errors() {
        let store = MemoryStore::new(seed::starter_collections());
        store.set_unavailable(true);
        assert!(run(&store, "projects").await.is_err());
    }
}
