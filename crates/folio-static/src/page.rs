//! The portfolio page and its render containers.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use folio_content::{default_skills, Certificates, Origin, Projects, ResourceKind, Skill};

use crate::builder::BuildError;
use crate::container::RenderContainer;
use crate::pipeline::ContentPipeline;
use crate::templates::{Context, TemplateEngine};

/// Colour scheme written to the page's `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}', expected dark or light", other)),
        }
    }
}

/// Site-wide settings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Page title
    pub title: String,

    /// Portfolio owner's name
    pub owner: String,

    /// One-line introduction
    pub tagline: String,

    /// Contact address
    pub email: Option<String>,

    /// Base URL for the site
    pub base_url: String,

    pub theme: Theme,

    /// Skills to list; empty means the built-in defaults
    pub skills: Vec<Skill>,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Portfolio".to_string(),
            tagline: String::new(),
            email: None,
            base_url: "/".to_string(),
            theme: Theme::Dark,
            skills: vec![],
            styles: vec![],
        }
    }
}

/// How many items each container ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub projects: usize,
    pub certificates: usize,
    pub fallbacks: usize,
}

/// One page load: the site settings plus a container per section.
pub struct PortfolioPage {
    site: SiteConfig,
    skills_html: String,
    projects: RenderContainer,
    certificates: RenderContainer,
}

impl PortfolioPage {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            skills_html: String::new(),
            projects: RenderContainer::new(ResourceKind::Projects),
            certificates: RenderContainer::new(ResourceKind::Certificates),
        }
    }

    pub fn projects(&self) -> &RenderContainer {
        &self.projects
    }

    pub fn certificates(&self) -> &RenderContainer {
        &self.certificates
    }

    pub fn container(&self, kind: ResourceKind) -> &RenderContainer {
        match kind {
            ResourceKind::Projects => &self.projects,
            ResourceKind::Certificates => &self.certificates,
        }
    }

    /// Fill every section. Both resources load concurrently and neither
    /// waits on the other's outcome.
    pub async fn populate(&mut self, pipeline: &ContentPipeline) -> Result<PageSummary, BuildError> {
        self.skills_html = self.render_skills(pipeline.templates())?;

        let (projects, certificates) = tokio::join!(
            pipeline.load_and_render::<Projects>(&mut self.projects),
            pipeline.load_and_render::<Certificates>(&mut self.certificates),
        );

        projects?;
        certificates?;

        let fallbacks = [&self.projects, &self.certificates]
            .iter()
            .filter(|c| c.state().origin() == Some(Origin::Fallback))
            .count();

        Ok(PageSummary {
            projects: self.projects.len(),
            certificates: self.certificates.len(),
            fallbacks,
        })
    }

    /// Re-run a single section's pipeline.
    pub async fn refresh(
        &mut self,
        kind: ResourceKind,
        pipeline: &ContentPipeline,
    ) -> Result<Origin, BuildError> {
        match kind {
            ResourceKind::Projects => {
                pipeline
                    .load_and_render::<Projects>(&mut self.projects)
                    .await
            }
            ResourceKind::Certificates => {
                pipeline
                    .load_and_render::<Certificates>(&mut self.certificates)
                    .await
            }
        }
    }

    /// Render the whole document.
    pub fn render(&self, templates: &TemplateEngine) -> Result<String, BuildError> {
        let context = Context {
            title: self.site.title.clone(),
            owner: self.site.owner.clone(),
            tagline: self.site.tagline.clone(),
            email: self.site.email.clone(),
            base_url: self.site.base_url.clone(),
            theme: self.site.theme.to_string(),
            styles: self
                .site
                .styles
                .iter()
                .map(|s| {
                    let filename = Path::new(s)
                        .file_name()
                        .and_then(|f| f.to_str())
                        .unwrap_or("style.css");
                    format!("{}assets/{}", self.site.base_url, filename)
                })
                .collect(),
            skills_html: self.skills_html.clone(),
            projects_html: self.projects.html().to_string(),
            certificates_html: self.certificates.html().to_string(),
        };

        templates
            .render_page(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    fn render_skills(&self, templates: &TemplateEngine) -> Result<String, BuildError> {
        let result = if self.site.skills.is_empty() {
            templates.render_skills(&default_skills())
        } else {
            templates.render_skills(&self.site.skills)
        };

        result.map_err(|e| BuildError::TemplateError(e.to_string()))
    }
}
