//! Experience, certification and tech-stack records

use serde::{Deserialize, Serialize};

use super::lenient::{null_as_empty, string_or_vec};

/// A timeline entry in the experience section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub year: String,
}

/// A certification or completed course
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A named group of technologies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStackCategory {
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "string_or_vec")]
    pub items: Vec<String>,
}

impl ExperienceEntry {
    pub fn new(role: &str, company: &str, year: &str) -> Self {
        Self {
            role: role.to_string(),
            company: company.to_string(),
            year: year.to_string(),
        }
    }
}

impl Certification {
    pub fn new(title: &str, issuer: &str, year: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            issuer: issuer.to_string(),
            year: year.to_string(),
            description: description.to_string(),
        }
    }
}

impl TechStackCategory {
    pub fn new(category: &str, items: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}
