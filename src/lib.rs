//! portfolio-rs: a personal portfolio site with a small document store
//!
//! Pages are composed on every request from the store's collections and
//! rendered through embedded Tera templates. Projects can be added, edited
//! and removed from a password-protected admin panel.

pub mod admin;
pub mod commands;
pub mod composer;
pub mod config;
pub mod content;
pub mod helpers;
pub mod render;
pub mod server;
pub mod store;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use store::{ContentStore, JsonStore, MemoryStore};

/// A portfolio site rooted at a directory
#[derive(Clone)]
pub struct Portfolio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Static files directory
    pub public_dir: std::path::PathBuf,
    /// The JSON document holding every collection
    pub data_path: std::path::PathBuf,
}

impl Portfolio {
    /// Load `_config.yml` from a directory (defaults when absent) and apply
    /// environment overrides
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env_overrides()?;

        let public_dir = base_dir.join(&config.public_dir);
        let data_path = base_dir.join(&config.data_file);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            data_path,
        })
    }

    /// Open the file-backed store
    pub fn open_store(&self) -> Result<Arc<dyn ContentStore>> {
        let store = JsonStore::open(&self.data_path)?;
        tracing::debug!("Opened data file {:?}", store.path());
        Ok(Arc::new(store))
    }

    /// A seeded in-memory store; nothing is written to disk
    pub fn ephemeral_store(&self) -> Arc<dyn ContentStore> {
        Arc::new(MemoryStore::new(content::seed::starter_collections()))
    }
}
