//! Built-in portfolio theme using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers;

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Record fields are user supplied, so every .html template escapes
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("portfolio/layout.html")),
            ("inner.html", include_str!("portfolio/inner.html")),
            ("home.html", include_str!("portfolio/home.html")),
            ("projects.html", include_str!("portfolio/projects.html")),
            ("tech_stack.html", include_str!("portfolio/tech_stack.html")),
            (
                "certifications.html",
                include_str!("portfolio/certifications.html"),
            ),
            ("admin/list.html", include_str!("portfolio/admin/list.html")),
            ("admin/form.html", include_str!("portfolio/admin/form.html")),
            // Partials
            (
                "partials/style.css",
                include_str!("portfolio/partials/style.css"),
            ),
            (
                "partials/scripts.html",
                include_str!("portfolio/partials/scripts.html"),
            ),
            (
                "partials/cards.html",
                include_str!("portfolio/partials/cards.html"),
            ),
            (
                "partials/details.html",
                include_str!("portfolio/partials/details.html"),
            ),
            (
                "partials/footer.html",
                include_str!("portfolio/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 80,
    };

    Ok(tera::Value::String(helpers::truncate(&s, length, None)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub copyright_year: String,
    pub avatar_fallback: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavData {
    pub home: String,
    pub projects: String,
    pub tech_stack: String,
    pub certifications: String,
    pub admin: String,
    pub admin_add: String,
}

/// A preview card on the home and projects pages
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
}

/// A row of the admin project table
#[derive(Debug, Clone, Serialize)]
pub struct AdminRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub description: &'a str,
    pub shape: &'static str,
    pub edit_url: String,
    pub delete_url: String,
}

/// Values shown in the project form
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormData {
    /// Where the form posts to
    pub action: String,
    /// The id cannot be changed when editing
    pub editing: bool,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
    pub description: String,
    pub tags: String,
    pub blocks: Vec<BlockData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockData {
    pub kind: String,
    pub value: String,
}
