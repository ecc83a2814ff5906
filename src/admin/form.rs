//! Project form submitted from the admin panel

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::content::{ContentBlock, Project, ProjectBody};
use crate::templates::{BlockData, FormData};

lazy_static! {
    /// Ids end up in URLs and DOM ids
    static ref ID_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap();
}

/// Why a submitted form was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{0}` is required")]
    Missing(&'static str),

    #[error("invalid id `{0}`: use letters, digits, `-` and `_`, starting with a letter or digit")]
    InvalidId(String),

    #[error("block {index} has unknown type `{kind}`")]
    UnknownBlockType { index: usize, kind: String },

    #[error("{types} block types but {values} block values")]
    BlockCountMismatch { types: usize, values: usize },
}

/// Raw form fields, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
    pub description: String,
    /// Comma separated
    pub tags: String,
    pub block_types: Vec<String>,
    pub block_values: Vec<String>,
}

impl ProjectForm {
    /// Collect url-encoded pairs; repeated `block_type`/`block_value` keys keep their order
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = ProjectForm::default();

        for (key, value) in pairs {
            match key.as_str() {
                "id" => form.id = value,
                "title" => form.title = value,
                "subtitle" => form.subtitle = value,
                "image" => form.image = value,
                "link" => form.link = value,
                "description" => form.description = value,
                "tags" => form.tags = value,
                "block_type" => form.block_types.push(value),
                "block_value" => form.block_values.push(value),
                other => tracing::debug!("Ignoring unknown form field {:?}", other),
            }
        }

        form
    }

    /// Pre-fill from a stored project.
    ///
    /// Narrative projects come back as text blocks with the first two gallery
    /// images after the story and the goal, the same order they render in.
    pub fn from_project(project: &Project) -> Self {
        let mut form = ProjectForm {
            id: project.id.clone(),
            title: project.title.clone(),
            subtitle: project.subtitle.clone(),
            image: project.image.clone(),
            link: project.link.clone().unwrap_or_default(),
            description: project.description.clone(),
            tags: project.tags.join(", "),
            ..ProjectForm::default()
        };

        match &project.body {
            ProjectBody::Blocks(blocks) => {
                for block in blocks {
                    match block {
                        ContentBlock::Text(text) => form.push_block("text", text),
                        ContentBlock::Image(src) => form.push_block("image", src),
                        ContentBlock::Unrecognized { kind, .. } => {
                            tracing::debug!(
                                "Block type {:?} of {} cannot be edited and is left out",
                                kind,
                                project.id
                            );
                        }
                    }
                }
            }
            ProjectBody::Narrative { narrative, gallery } => {
                form.push_block("text", &narrative.gist);
                if let Some(src) = gallery.first() {
                    form.push_block("image", src);
                }
                form.push_block("text", &narrative.goal);
                if let Some(src) = gallery.get(1) {
                    form.push_block("image", src);
                }
                form.push_block("text", &narrative.approach);
                form.push_block("text", &narrative.result);
            }
        }

        form
    }

    fn push_block(&mut self, kind: &str, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        self.block_types.push(kind.to_string());
        self.block_values.push(value.to_string());
    }

    /// Validate a new project
    pub fn validate(&self) -> Result<Project, FormError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(FormError::Missing("id"));
        }
        if !ID_PATTERN.is_match(id) {
            return Err(FormError::InvalidId(id.to_string()));
        }
        self.build(id)
    }

    /// Validate a replacement for the existing project `id`; the `id` field is ignored
    pub fn validate_for(&self, id: &str) -> Result<Project, FormError> {
        self.build(id)
    }

    fn build(&self, id: &str) -> Result<Project, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::Missing("title"));
        }

        Ok(Project {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: self.subtitle.trim().to_string(),
            image: self.image.trim().to_string(),
            link: Some(self.link.trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            tags: split_tags(&self.tags),
            description: self.description.trim().to_string(),
            body: ProjectBody::Blocks(self.blocks()?),
        })
    }

    fn blocks(&self) -> Result<Vec<ContentBlock>, FormError> {
        if self.block_types.len() != self.block_values.len() {
            return Err(FormError::BlockCountMismatch {
                types: self.block_types.len(),
                values: self.block_values.len(),
            });
        }

        let mut blocks = Vec::new();
        for (index, (kind, value)) in self.block_types.iter().zip(&self.block_values).enumerate() {
            // Unused rows
            if value.trim().is_empty() {
                continue;
            }
            match kind.trim() {
                "text" => blocks.push(ContentBlock::Text(value.clone())),
                "image" => blocks.push(ContentBlock::Image(value.trim().to_string())),
                other => {
                    return Err(FormError::UnknownBlockType {
                        index,
                        kind: other.to_string(),
                    })
                }
            }
        }
        Ok(blocks)
    }

    /// Values to show when the form is rendered again
    pub fn to_form_data(&self, action: String, editing: bool) -> FormData {
        let rows = self.block_types.len().max(self.block_values.len());
        let blocks = (0..rows)
            .map(|i| BlockData {
                kind: self.block_types.get(i).cloned().unwrap_or_default(),
                value: self.block_values.get(i).cloned().unwrap_or_default(),
            })
            .collect();

        FormData {
            action,
            editing,
            id: self.id.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            image: self.image.clone(),
            link: self.link.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            blocks,
        }
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Narrative;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_form() {
        let form = ProjectForm::from_pairs(pairs(&[
            ("id", "demo"),
            ("title", " Demo "),
            ("tags", "Go, Rust,, "),
            ("link", "  "),
            ("block_type", "text"),
            ("block_value", "Hello\r\nWorld"),
            ("block_type", "image"),
            ("block_value", " shot.png "),
            ("block_type", "text"),
            ("block_value", ""),
        ]));
        let project = form.validate().unwrap();

        assert_eq!(project.id, "demo");
        assert_eq!(project.title, "Demo");
        assert_eq!(project.tags, vec!["Go", "Rust"]);
        assert_eq!(project.link, None);
        assert_eq!(
            project.body,
            ProjectBody::Blocks(vec![
                ContentBlock::Text("Hello\r\nWorld".to_string()),
                ContentBlock::Image("shot.png".to_string()),
            ])
        );
    }

    #[test]
    fn test_required_fields() {
        let form = ProjectForm::from_pairs(pairs(&[("title", "Demo")]));
        assert_eq!(form.validate(), Err(FormError::Missing("id")));

        let form = ProjectForm::from_pairs(pairs(&[("id", "demo"), ("title", "  ")]));
        assert_eq!(form.validate(), Err(FormError::Missing("title")));
    }

    #[test]
    fn test_id_pattern() {
        for bad in ["has space", "-leading", "a/b", "quote\"", "ümlaut"] {
            let form = ProjectForm::from_pairs(pairs(&[("id", bad), ("title", "T")]));
            assert!(
                matches!(form.validate(), Err(FormError::InvalidId(_))),
                "{} should be rejected",
                bad
            );
        }
        for good in ["a", "cet-tracker", "v2_final", "9lives"] {
            let form = ProjectForm::from_pairs(pairs(&[("id", good), ("title", "T")]));
            assert!(form.validate().is_ok(), "{} should be accepted", good);
        }
    }

    #[test]
    fn test_unknown_block_type() {
        let form = ProjectForm::from_pairs(pairs(&[
            ("id", "demo"),
            ("title", "Demo"),
            ("block_type", "video"),
            ("block_value", "clip.mp4"),
        ]));
        assert_eq!(
            form.validate(),
            Err(FormError::UnknownBlockType {
                index: 0,
                kind: "video".to_string()
            })
        );
    }

    #[test]
    fn test_mismatched_block_pairs() {
        let form = ProjectForm::from_pairs(pairs(&[
            ("id", "demo"),
            ("title", "Demo"),
            ("block_type", "text"),
            ("block_type", "image"),
            ("block_value", "only one"),
        ]));
        assert_eq!(
            form.validate(),
            Err(FormError::BlockCountMismatch {
                types: 2,
                values: 1
            })
        );
    }

    #[test]
    fn test_validate_for_uses_path_id() {
        let form = ProjectForm::from_pairs(pairs(&[("id", "other"), ("title", "Demo")]));
        assert_eq!(form.validate_for("kept").unwrap().id, "kept");
    }

    #[test]
    fn test_narrative_prefill_order() {
        let project = Project {
            id: "old".to_string(),
            title: "Old".to_string(),
            subtitle: String::new(),
            image: String::new(),
            link: Some("https://example.com".to_string()),
            tags: vec!["PHP".to_string(), "MySQL".to_string()],
            description: String::new(),
            body: ProjectBody::Narrative {
                narrative: Narrative {
                    gist: "gist".to_string(),
                    goal: "goal".to_string(),
                    approach: "approach".to_string(),
                    result: "result".to_string(),
                },
                gallery: vec!["g0.png".to_string(), "g1.png".to_string()],
            },
        };
        let form = ProjectForm::from_project(&project);

        assert_eq!(form.tags, "PHP, MySQL");
        assert_eq!(form.link, "https://example.com");
        assert_eq!(
            form.block_types,
            vec!["text", "image", "text", "image", "text", "text"]
        );
        assert_eq!(
            form.block_values,
            vec!["gist", "g0.png", "goal", "g1.png", "approach", "result"]
        );

        // Saving migrates the record to blocks
        let saved = form.validate_for("old").unwrap();
        assert_eq!(saved.body.shape(), "blocks");
        assert_eq!(saved.tags, project.tags);
    }

    #[test]
    fn test_form_data_keeps_uneven_rows() {
        let form = ProjectForm::from_pairs(pairs(&[
            ("block_type", "text"),
            ("block_type", "image"),
            ("block_value", "a"),
        ]));
        let data = form.to_form_data("/admin/add".to_string(), false);
        assert_eq!(data.blocks.len(), 2);
        assert_eq!(data.blocks[1].kind, "image");
        assert_eq!(data.blocks[1].value, "");
    }
}
