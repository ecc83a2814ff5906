//! Initialize a new portfolio site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::seed;
use crate::store::JsonStore;

/// Initialize a new site in the given directory. Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let mut config = SiteConfig::default();
    config.copyright_year = chrono::Local::now().format("%Y").to_string();

    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join(&config.public_dir))?;

    // Create default _config.yml
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        let config_content = format!(
            "# Portfolio configuration\n\
             # PORT, PORTFOLIO_ADMIN_USER and PORTFOLIO_ADMIN_PASSWORD override the values below.\n\n{}",
            serde_yaml::to_string(&config)?
        );
        fs::write(&config_path, config_content)
            .with_context(|| format!("failed to write {:?}", config_path))?;
    }

    // Seed the data file
    let data_path = target_dir.join(&config.data_file);
    if data_path.exists() {
        tracing::info!("Keeping existing {:?}", data_path);
    } else {
        JsonStore::write_collections(&data_path, &seed::starter_collections())?;
    }

    Ok(())
}
