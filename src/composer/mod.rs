//! Page composer - turns store records into complete HTML pages
//!
//! Composition is pure: every method takes records that were already read
//! and renders them through the embedded templates. The same records always
//! produce the same bytes.

use anyhow::Result;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{Certification, ExperienceEntry, Project, TechStackCategory};
use crate::helpers::{avatar_fallback, encode_segment, url_for};
use crate::render::render_details;
use crate::store::{ContentStore, StoreError};
use crate::templates::{AdminRow, FormData, NavData, ProjectCard, SiteData, TemplateRenderer};

/// Project cards on the home page
pub const FEATURED_PROJECTS: usize = 3;
/// Certifications on the home page
pub const FEATURED_CERTIFICATIONS: usize = 3;
/// Tech-stack categories on the home page
pub const STACK_PREVIEW_CATEGORIES: usize = 2;

/// The leading `count` items, in store order
fn featured<T>(items: &[T], count: usize) -> &[T] {
    &items[..items.len().min(count)]
}

/// Everything the home page shows
#[derive(Debug, Clone, Default)]
pub struct HomeRecords {
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub certifications: Vec<Certification>,
    pub tech_stack: Vec<TechStackCategory>,
}

impl HomeRecords {
    /// Read all four collections concurrently; any failure fails the whole read
    pub async fn fetch(store: &dyn ContentStore) -> Result<Self, StoreError> {
        let (projects, experience, certifications, tech_stack) = tokio::try_join!(
            store.list_projects(),
            store.list_experience(),
            store.list_certifications(),
            store.list_tech_stack(),
        )?;

        Ok(Self {
            projects,
            experience,
            certifications,
            tech_stack,
        })
    }
}

/// Renders the public and admin pages
pub struct PageComposer {
    config: SiteConfig,
    renderer: TemplateRenderer,
    site: SiteData,
    nav: NavData,
}

impl PageComposer {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        let site = SiteData {
            title: config.title.clone(),
            copyright_year: config.copyright_year.clone(),
            avatar_fallback: avatar_fallback(&config.profile.name),
        };

        let nav = NavData {
            home: url_for(config, "/"),
            projects: url_for(config, "/projects"),
            tech_stack: url_for(config, "/tech-stack"),
            certifications: url_for(config, "/certifications"),
            admin: url_for(config, "/admin"),
            admin_add: url_for(config, "/admin/add"),
        };

        Ok(Self {
            config: config.clone(),
            renderer,
            site,
            nav,
        })
    }

    /// Create a base context with common variables
    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("nav", &self.nav);
        context.insert("profile", &self.config.profile);
        context
    }

    fn inner_context(&self, page_title: &str) -> Context {
        let mut context = self.base_context();
        context.insert("page_title", page_title);
        context
    }

    /// Home page: previews of every collection plus a detail view for every project
    pub fn home(&self, records: &HomeRecords) -> Result<String> {
        let mut context = self.base_context();
        context.insert(
            "stack",
            featured(&records.tech_stack, STACK_PREVIEW_CATEGORIES),
        );
        context.insert("experience", &records.experience);
        context.insert(
            "cards",
            &project_cards(featured(&records.projects, FEATURED_PROJECTS)),
        );
        context.insert("details", &render_details(&records.projects));
        context.insert(
            "certifications",
            featured(&records.certifications, FEATURED_CERTIFICATIONS),
        );

        self.renderer.render("home.html", &context)
    }

    pub fn projects(&self, projects: &[Project]) -> Result<String> {
        let mut context = self.inner_context("Recent Projects");
        context.insert("cards", &project_cards(projects));
        context.insert("details", &render_details(projects));
        self.renderer.render("projects.html", &context)
    }

    pub fn tech_stack(&self, categories: &[TechStackCategory]) -> Result<String> {
        let mut context = self.inner_context("Tech Stack");
        context.insert("stack", categories);
        self.renderer.render("tech_stack.html", &context)
    }

    pub fn certifications(&self, certifications: &[Certification]) -> Result<String> {
        let mut context = self.inner_context("Certifications");
        context.insert("certifications", certifications);
        self.renderer.render("certifications.html", &context)
    }

    /// Admin project table with edit and delete actions
    pub fn admin_list(&self, projects: &[Project]) -> Result<String> {
        let rows: Vec<AdminRow> = projects
            .iter()
            .map(|p| {
                let id = encode_segment(&p.id);
                AdminRow {
                    id: &p.id,
                    title: &p.title,
                    subtitle: &p.subtitle,
                    description: &p.description,
                    shape: p.body.shape(),
                    edit_url: url_for(&self.config, &format!("/admin/edit/{}", id)),
                    delete_url: url_for(&self.config, &format!("/admin/delete/{}", id)),
                }
            })
            .collect();

        let mut context = self.inner_context("Manage Projects");
        context.insert("rows", &rows);
        self.renderer.render("admin/list.html", &context)
    }

    /// Project form, with the values to show and an optional error banner
    pub fn admin_form(&self, form: &FormData, error: Option<&str>) -> Result<String> {
        let title = if form.editing {
            "Edit Project"
        } else {
            "Add Project"
        };
        let mut context = self.inner_context(title);
        context.insert("form", form);
        context.insert("error", &error);
        self.renderer.render("admin/form.html", &context)
    }

    /// Empty creation form posting to `/admin/add`
    pub fn new_form(&self) -> FormData {
        FormData {
            action: self.nav.admin_add.clone(),
            ..FormData::default()
        }
    }

    pub fn home_url(&self) -> &str {
        &self.nav.home
    }

    /// Admin landing page, where successful writes redirect to
    pub fn admin_url(&self) -> &str {
        &self.nav.admin
    }

    /// Where the edit form of `id` posts to
    pub fn edit_action(&self, id: &str) -> String {
        url_for(&self.config, &format!("/admin/edit/{}", encode_segment(id)))
    }
}

fn project_cards(projects: &[Project]) -> Vec<ProjectCard<'_>> {
    projects
        .iter()
        .map(|p| ProjectCard {
            id: &p.id,
            title: &p.title,
            image: &p.image,
            description: &p.description,
            tags: &p.tags,
        })
        .collect()
}
