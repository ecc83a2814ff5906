//! Project detail rendering
//!
//! A project's detail view is a flat, ordered list of [`Fragment`]s. The fixed
//! sections always come first (header, cover, live link, tags), followed by
//! the body, which depends on the shape the project was stored in:
//!
//! - block projects emit one fragment per content block, in storage order,
//!   or a single [`Fragment::Placeholder`] when nothing renderable is left;
//! - narrative projects emit Story, the first gallery image, Goal, the second
//!   gallery image, and a closing section holding Approach and Result.
//!   Gallery images past the second are not shown.
//!
//! Fragments borrow from the project; templates turn them into markup.

use serde::Serialize;

use crate::content::{ContentBlock, Narrative, Project, ProjectBody};

/// One piece of a project detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment<'a> {
    Header {
        title: &'a str,
        subtitle: &'a str,
    },
    Cover {
        src: &'a str,
        alt: &'a str,
    },
    LiveLink {
        href: &'a str,
    },
    Tags {
        tags: &'a [String],
    },
    /// A titled narrative section
    Section {
        heading: &'static str,
        lines: Vec<&'a str>,
    },
    /// Approach and Result, shown side by side at the end of a narrative
    Closing {
        approach: Vec<&'a str>,
        result: Vec<&'a str>,
    },
    /// A paragraph; each line is followed by a line break except the last
    Text {
        lines: Vec<&'a str>,
    },
    /// A full-width image
    Image {
        src: &'a str,
    },
    /// Stands in for an empty body
    Placeholder,
}

/// The rendered detail view of one project, keyed by its id
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail<'a> {
    pub id: &'a str,
    pub fragments: Vec<Fragment<'a>>,
}

/// Render one project into its ordered fragment sequence
pub fn render_project(project: &Project) -> Vec<Fragment<'_>> {
    let mut fragments = vec![
        Fragment::Header {
            title: &project.title,
            subtitle: &project.subtitle,
        },
        Fragment::Cover {
            src: &project.image,
            alt: &project.title,
        },
    ];

    if let Some(href) = project.link.as_deref().filter(|l| !l.trim().is_empty()) {
        fragments.push(Fragment::LiveLink { href });
    }

    if !project.tags.is_empty() {
        fragments.push(Fragment::Tags {
            tags: &project.tags,
        });
    }

    match &project.body {
        ProjectBody::Blocks(blocks) => render_blocks(&project.id, blocks, &mut fragments),
        ProjectBody::Narrative { narrative, gallery } => {
            render_narrative(narrative, gallery, &mut fragments)
        }
    }

    fragments
}

/// Render every project, preserving the order they were given in
pub fn render_details(projects: &[Project]) -> Vec<ProjectDetail<'_>> {
    projects
        .iter()
        .map(|project| ProjectDetail {
            id: &project.id,
            fragments: render_project(project),
        })
        .collect()
}

fn render_blocks<'a>(id: &str, blocks: &'a [ContentBlock], out: &mut Vec<Fragment<'a>>) {
    let before = out.len();

    for block in blocks {
        match block {
            ContentBlock::Text(text) => out.push(Fragment::Text {
                lines: split_lines(text),
            }),
            ContentBlock::Image(src) => out.push(Fragment::Image { src }),
            ContentBlock::Unrecognized { kind, .. } => {
                tracing::debug!("Skipping unrecognized block type {:?} in project {}", kind, id);
            }
        }
    }

    if out.len() == before {
        out.push(Fragment::Placeholder);
    }
}

fn render_narrative<'a>(
    narrative: &'a Narrative,
    gallery: &'a [String],
    out: &mut Vec<Fragment<'a>>,
) {
    out.push(Fragment::Section {
        heading: "The Story",
        lines: split_lines(&narrative.gist),
    });
    if let Some(src) = gallery.first() {
        out.push(Fragment::Image { src });
    }
    out.push(Fragment::Section {
        heading: "The Goal",
        lines: split_lines(&narrative.goal),
    });
    if let Some(src) = gallery.get(1) {
        out.push(Fragment::Image { src });
    }
    out.push(Fragment::Closing {
        approach: split_lines(&narrative.approach),
        result: split_lines(&narrative.result),
    });
}

/// Split on `\n`, tolerating `\r\n` from form submissions
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
