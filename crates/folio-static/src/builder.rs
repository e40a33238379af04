//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use walkdir::WalkDir;

use folio_content::{ContentLoader, DirSource, HttpSource, ResourceSource};

use crate::assets::AssetPipeline;
use crate::page::{PageSummary, PortfolioPage, SiteConfig};
use crate::pipeline::ContentPipeline;
use crate::templates::TemplateEngine;

/// Where content resources are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Directory containing `data/*.json`
    Dir(PathBuf),
    /// Base URL serving `data/*.json`
    Url(String),
}

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Where the JSON resources come from
    pub content: ContentSource,

    /// Request timeout when content comes from a URL
    pub timeout: Duration,

    /// Output directory
    pub output_dir: PathBuf,

    /// Directory copied verbatim into the output (images and such)
    pub static_dir: Option<PathBuf>,

    /// Minify CSS output
    pub minify: bool,

    /// Site-wide settings
    pub site: SiteConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: ContentSource::Dir(PathBuf::from(".")),
            timeout: Duration::from_secs(10),
            output_dir: PathBuf::from("dist"),
            static_dir: Some(PathBuf::from("static")),
            minify: true,
            site: SiteConfig::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of project cards rendered
    pub projects: usize,

    /// Number of certificate cards rendered
    pub certificates: usize,

    /// Number of resources that fell back to built-in content
    pub fallbacks: usize,

    /// Number of static files copied
    pub static_files: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Invalid content source: {0}")]
    SourceError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    pipeline: ContentPipeline,
}

impl StaticBuilder {
    /// Create a builder reading content from the configured source.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let source: Arc<dyn ResourceSource> = match &config.content {
            ContentSource::Dir(dir) => Arc::new(DirSource::new(dir)),
            ContentSource::Url(url) => Arc::new(
                HttpSource::new(url, config.timeout)
                    .map_err(|e| BuildError::SourceError(e.to_string()))?,
            ),
        };

        Ok(Self::with_source(config, source))
    }

    /// Create a builder reading content from an explicit source.
    pub fn with_source(config: BuildConfig, source: Arc<dyn ResourceSource>) -> Self {
        tracing::info!("Reading content from {}", source.describe());

        let pipeline = ContentPipeline::new(
            ContentLoader::new(source),
            Arc::new(TemplateEngine::new()),
        );

        Self { config, pipeline }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &ContentPipeline {
        &self.pipeline
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        self.build_page().await.map(|(result, _)| result)
    }

    /// Build the static site, keeping the populated page.
    pub async fn build_page(&self) -> Result<(BuildResult, PortfolioPage), BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let (page, summary) = self.render().await?;

        self.generate_assets()?;
        let static_files = self.copy_static()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        let result = BuildResult {
            projects: summary.projects,
            certificates: summary.certificates,
            fallbacks: summary.fallbacks,
            static_files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        };

        Ok((result, page))
    }

    /// Load content into a fresh page and write `index.html`.
    pub async fn render(&self) -> Result<(PortfolioPage, PageSummary), BuildError> {
        let mut page = PortfolioPage::new(self.config.site.clone());
        let summary = page.populate(&self.pipeline).await?;
        self.write_page(&page)?;
        Ok((page, summary))
    }

    /// Write the rendered page to `index.html` in the output directory.
    pub fn write_page(&self, page: &PortfolioPage) -> Result<PathBuf, BuildError> {
        let html = page.render(self.pipeline.templates())?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let path = self.config.output_dir.join("index.html");
        fs::write(&path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(path)
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Copy configured stylesheets
        for style_path in &self.config.site.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
                })?;
                fs::write(assets_dir.join(filename), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Copy the static directory into the output root.
    fn copy_static(&self) -> Result<usize, BuildError> {
        let Some(static_dir) = &self.config.static_dir else {
            return Ok(0);
        };

        if !static_dir.exists() {
            tracing::debug!("No static directory at {}", static_dir.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::copy(path, &target).map_err(|e| {
                BuildError::WriteError(format!("{} -> {}: {}", path.display(), target.display(), e))
            })?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);

        Ok(copied)
    }

    /// Generate sitemap and robots.txt.
    ///
    /// Sitemap locations must be absolute, so both files are skipped unless
    /// `base_url` is an `http(s)://` URL.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let Some(base_url) = absolute_base_url(&self.config.site.base_url) else {
            tracing::debug!(
                "Skipping sitemap: base_url {:?} is not an absolute URL",
                self.config.site.base_url
            );
            return Ok(());
        };

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}</loc>
  </url>
</urlset>"#,
            base_url
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!("User-agent: *\nAllow: /\nSitemap: {}sitemap.xml", base_url);
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// `base_url` with a trailing slash, if it is an absolute http(s) URL.
fn absolute_base_url(base_url: &str) -> Option<String> {
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return None;
    }

    Some(format!("{}/", base_url.trim_end_matches('/')))
}
