//! Project model
//!
//! Two document shapes have been written to the store over time: the
//! current one carries an ordered `contentBlocks` list, the older one a fixed
//! `modalContent` narrative plus an optional `gallery`. Both are read into a
//! single [`Project`] whose [`ProjectBody`] records which shape it came from.

use serde::{Deserialize, Serialize};

use super::lenient::{blank_as_none, null_as_empty, string_or_vec, vec_or_null};

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProjectDocument", into = "ProjectDocument")]
pub struct Project {
    /// Unique identifier, used in URLs and as the detail view key
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Cover image URI
    pub image: String,
    /// Live website URI
    pub link: Option<String>,
    pub tags: Vec<String>,
    /// Short description shown on preview cards
    pub description: String,
    pub body: ProjectBody,
}

/// Long-form description of a project
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectBody {
    /// Ordered content blocks
    Blocks(Vec<ContentBlock>),
    /// Legacy story/goal/approach/result record with a side gallery
    Narrative {
        narrative: Narrative,
        gallery: Vec<String>,
    },
}

impl Default for ProjectBody {
    fn default() -> Self {
        ProjectBody::Blocks(Vec::new())
    }
}

impl ProjectBody {
    /// Short name of the document shape
    pub fn shape(&self) -> &'static str {
        match self {
            ProjectBody::Blocks(_) => "blocks",
            ProjectBody::Narrative { .. } => "narrative",
        }
    }
}

/// The four-part narrative of legacy project documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Narrative {
    #[serde(deserialize_with = "null_as_empty")]
    pub gist: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub goal: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub approach: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub result: String,
}

/// One unit of a project's long-form description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub enum ContentBlock {
    /// Paragraph text; newlines are line breaks
    Text(String),
    /// Full-width image URI
    Image(String),
    /// A block written with a type this version does not know.
    /// Kept verbatim so the document survives a rewrite of the store.
    Unrecognized {
        kind: serde_json::Value,
        value: serde_json::Value,
    },
}

impl ContentBlock {
    /// The `type` tag as stored
    pub fn kind(&self) -> &str {
        match self {
            ContentBlock::Text(_) => "text",
            ContentBlock::Image(_) => "image",
            ContentBlock::Unrecognized { kind, .. } => kind.as_str().unwrap_or_default(),
        }
    }
}

/// Wire shape of a content block: `{"type": "...", "value": ...}`.
/// The tag is read as any JSON value so a malformed one only affects its block.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBlock {
    #[serde(rename = "type", default)]
    kind: serde_json::Value,
    #[serde(default)]
    value: serde_json::Value,
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        let is_text = raw.kind.as_str() == Some("text");
        let is_image = raw.kind.as_str() == Some("image");

        match raw.value {
            serde_json::Value::String(text) if is_text => ContentBlock::Text(text),
            serde_json::Value::Null if is_text => ContentBlock::Text(String::new()),
            serde_json::Value::String(src) if is_image => ContentBlock::Image(src),
            value => ContentBlock::Unrecognized {
                kind: raw.kind,
                value,
            },
        }
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Text(text) => RawBlock {
                kind: serde_json::Value::from("text"),
                value: serde_json::Value::String(text),
            },
            ContentBlock::Image(src) => RawBlock {
                kind: serde_json::Value::from("image"),
                value: serde_json::Value::String(src),
            },
            ContentBlock::Unrecognized { kind, value } => RawBlock { kind, value },
        }
    }
}

/// Stored document shape of a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectDocument {
    #[serde(deserialize_with = "null_as_empty")]
    id: String,
    #[serde(deserialize_with = "null_as_empty")]
    title: String,
    #[serde(deserialize_with = "null_as_empty")]
    subtitle: String,
    #[serde(deserialize_with = "null_as_empty")]
    image: String,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    link: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    tags: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_blocks: Option<Vec<ContentBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    modal_content: Option<Narrative>,
    #[serde(
        deserialize_with = "vec_or_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    gallery: Vec<String>,
}

impl From<ProjectDocument> for Project {
    fn from(doc: ProjectDocument) -> Self {
        // Block lists win when a document carries both shapes
        let body = match (doc.content_blocks, doc.modal_content) {
            (Some(blocks), _) => ProjectBody::Blocks(blocks),
            (None, Some(narrative)) => ProjectBody::Narrative {
                narrative,
                gallery: doc.gallery,
            },
            (None, None) => ProjectBody::default(),
        };

        Project {
            id: doc.id,
            title: doc.title,
            subtitle: doc.subtitle,
            image: doc.image,
            link: doc.link,
            tags: doc.tags,
            description: doc.description,
            body,
        }
    }
}

impl From<Project> for ProjectDocument {
    fn from(project: Project) -> Self {
        let (content_blocks, modal_content, gallery) = match project.body {
            ProjectBody::Blocks(blocks) => (Some(blocks), None, Vec::new()),
            ProjectBody::Narrative { narrative, gallery } => (None, Some(narrative), gallery),
        };

        ProjectDocument {
            id: project.id,
            title: project.title,
            subtitle: project.subtitle,
            image: project.image,
            link: project.link,
            tags: project.tags,
            description: project.description,
            content_blocks,
            modal_content,
            gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_document() {
        let json = r#"{
            "id": "p1",
            "title": "Demo",
            "tags": ["Go"],
            "contentBlocks": [
                {"type": "text", "value": "Hello\nWorld"},
                {"type": "image", "value": "https://example.com/a.png"}
            ]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.link, None);
        assert_eq!(
            project.body,
            ProjectBody::Blocks(vec![
                ContentBlock::Text("Hello\nWorld".to_string()),
                ContentBlock::Image("https://example.com/a.png".to_string()),
            ])
        );
    }

    #[test]
    fn test_parse_narrative_document() {
        let json = r#"{
            "id": "holiday-hunter",
            "title": "Holiday Hunter",
            "link": "https://holiday-hunter.vercel.app",
            "modalContent": {"gist": "Fun", "goal": "APIs", "approach": "Next.js"},
            "gallery": ["a.png", "b.png"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        match project.body {
            ProjectBody::Narrative { narrative, gallery } => {
                assert_eq!(narrative.gist, "Fun");
                assert_eq!(narrative.result, "");
                assert_eq!(gallery, vec!["a.png", "b.png"]);
            }
            other => panic!("expected narrative body, got {:?}", other),
        }
    }

    #[test]
    fn test_document_without_body_has_no_blocks() {
        let project: Project = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert_eq!(project.body, ProjectBody::Blocks(Vec::new()));
        assert!(project.tags.is_empty());
    }

    #[test]
    fn test_unknown_block_type_round_trips() {
        let json = r#"{"id": "x", "contentBlocks": [{"type": "video", "value": {"src": "v.mp4"}}]}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let ProjectBody::Blocks(blocks) = &project.body else {
            panic!("expected blocks");
        };
        assert_eq!(blocks[0].kind(), "video");

        let written = serde_json::to_value(&project).unwrap();
        assert_eq!(written["contentBlocks"][0]["type"], "video");
        assert_eq!(written["contentBlocks"][0]["value"]["src"], "v.mp4");
    }

    #[test]
    fn test_non_string_block_type_is_unrecognized() {
        let json = r#"{"id": "a", "contentBlocks": [
            {"type": 3, "value": "x"},
            {"type": "text", "value": "still here"}
        ]}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let ProjectBody::Blocks(blocks) = &project.body else {
            panic!("expected blocks");
        };
        assert_eq!(blocks[0].kind(), "");
        assert_eq!(blocks[1], ContentBlock::Text("still here".to_string()));

        let written = serde_json::to_value(&project).unwrap();
        assert_eq!(written["contentBlocks"][0]["type"], 3);
    }

    #[test]
    fn test_image_block_without_uri_is_unrecognized() {
        let block: ContentBlock = serde_json::from_str(r#"{"type": "image"}"#).unwrap();
        assert!(matches!(block, ContentBlock::Unrecognized { .. }));
    }

    #[test]
    fn test_serialize_keeps_shape() {
        let project = Project {
            id: "n".to_string(),
            title: "N".to_string(),
            subtitle: String::new(),
            image: String::new(),
            link: None,
            tags: Vec::new(),
            description: String::new(),
            body: ProjectBody::Narrative {
                narrative: Narrative::default(),
                gallery: Vec::new(),
            },
        };
        let written = serde_json::to_value(&project).unwrap();
        assert!(written.get("modalContent").is_some());
        assert!(written.get("contentBlocks").is_none());
        assert!(written.get("link").is_none());
    }
}
