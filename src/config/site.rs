//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub copyright_year: String,

    // URL
    pub root: String,

    // Directory
    pub public_dir: String,
    pub data_file: String,

    // Sections
    pub profile: ProfileConfig,
    pub admin: AdminConfig,
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            copyright_year: "2025".to_string(),

            root: "/".to_string(),

            public_dir: "public".to_string(),
            data_file: "db.json".to_string(),

            profile: ProfileConfig::default(),
            admin: AdminConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides (`PORT`, `PORTFOLIO_ADMIN_USER`,
    /// `PORTFOLIO_ADMIN_PASSWORD`) using `lookup` to read variables
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value: {:?}", port))?;
            tracing::debug!("PORT override: {}", self.server.port);
        }

        if let Some(username) = lookup("PORTFOLIO_ADMIN_USER") {
            self.admin.username = username;
        }

        if let Some(password) = lookup("PORTFOLIO_ADMIN_PASSWORD") {
            self.admin.password = password;
        }

        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }
}

/// The person the site is about
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub section: String,
    pub quote: String,
    pub avatar_light: String,
    pub avatar_dark: String,
    pub badge: String,
    pub banner_label: String,
    pub banner_headline: String,
    pub community_url: String,
    pub schedule_url: String,
    /// About card paragraphs
    pub about: Vec<String>,
    /// "Beyond Coding" tags
    pub interests: Vec<String>,
    pub memberships: Vec<String>,
    pub socials: Vec<SocialLink>,
    pub availability: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Clarence Neil Meneses".to_string(),
            role: "IT Student \\ Full-Stack Developer".to_string(),
            location: "Tanauan City, Batangas".to_string(),
            email: "clarenceneilpamplona@gmail.com".to_string(),
            section: "BA 4102".to_string(),
            quote: "Leading Innovations, Transforming Lives, Building the Nation.".to_string(),
            avatar_light: "/profile.png".to_string(),
            avatar_dark: "/profile-dark.png".to_string(),
            badge: "Graduating Soon! (Manifesting)".to_string(),
            banner_label: "BS INFORMATION TECHNOLOGY".to_string(),
            banner_headline: "CLASS OF 2026".to_string(),
            community_url: "https://github.com/Clarensyoooooo".to_string(),
            schedule_url: "#".to_string(),
            about: vec![
                "I'm a full-stack IT student specializing in developing solutions with JavaScript, PHP, and Python. I work on projects including building modern web applications, data analytics dashboards, and system testing.".to_string(),
                "Lately, I've been diving deeper into the world of Data Analytics using Power BI and integrating GIS mapping into web systems.".to_string(),
            ],
            interests: vec![
                "Digital Art".to_string(),
                "Analytics".to_string(),
                "Startup Culture".to_string(),
                "Learning New Tech Stuff".to_string(),
            ],
            memberships: vec!["BatStateU CICS".to_string(), "JPLPC Students".to_string()],
            socials: vec![
                SocialLink::new("LinkedIn", "linkedin", "https://www.linkedin.com/"),
                SocialLink::new("GitHub", "github", "https://github.com/"),
                SocialLink::new("Instagram", "instagram", "https://instagram.com/"),
            ],
            availability: "Open for Inquiries".to_string(),
        }
    }
}

/// A footer social link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    /// Feather icon name
    pub icon: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: &str, icon: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            url: url.to_string(),
        }
    }
}

/// Admin panel credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            realm: "Portfolio Admin".to_string(),
        }
    }
}

impl AdminConfig {
    /// Whether the shipped credentials are still in use
    pub fn uses_default_credentials(&self) -> bool {
        let default = Self::default();
        self.username == default.username && self.password == default.password
    }
}

/// Listen address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.data_file, "db.json");
        assert_eq!(config.server.port, 3000);
        assert!(config.admin.uses_default_credentials());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Folio
copyright_year: "2026"
profile:
  name: Test User
  interests: [Chess]
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.copyright_year, "2026");
        assert_eq!(config.profile.name, "Test User");
        assert_eq!(config.profile.interests, vec!["Chess"]);
        // Untouched fields keep their defaults
        assert_eq!(config.profile.section, "BA 4102");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("PORT", "4100"),
            ("PORTFOLIO_ADMIN_USER", "root"),
            ("PORTFOLIO_ADMIN_PASSWORD", "s3cret"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.admin.username, "root");
        assert_eq!(config.admin.password, "s3cret");
        assert!(!config.admin.uses_default_credentials());
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = SiteConfig::default();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert!(result.is_err());
    }
}
