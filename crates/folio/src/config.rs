//! `folio.toml` loading.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use folio_content::Skill;
use folio_static::{BuildConfig, ContentSource, SiteConfig, Theme};
use serde::Deserialize;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub content: ContentSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_title")]
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    pub email: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Paths to extra CSS stylesheets
    #[serde(default)]
    pub styles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContentSection {
    #[serde(default = "default_content_dir")]
    pub dir: String,
    /// When set, content is fetched over HTTP instead of read from `dir`
    pub url: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct BuildSection {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            owner: default_title(),
            tagline: String::new(),
            email: None,
            base_url: default_base_url(),
            theme: default_theme(),
            styles: vec![],
        }
    }
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            static_dir: default_static_dir(),
            minify: default_minify(),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_theme() -> String {
    "dark".to_string()
}
fn default_content_dir() -> String {
    ".".to_string()
}
fn default_timeout() -> u64 {
    10
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

/// Directory that relative paths in `path` are resolved against.
pub fn config_root(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

impl ConfigFile {
    /// Turn the file settings into a build configuration.
    ///
    /// Relative paths are taken from `root`, the directory holding the file.
    pub fn into_build_config(self, root: &Path) -> Result<BuildConfig> {
        let theme: Theme = self
            .site
            .theme
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let content = match self.content.url {
            Some(url) => ContentSource::Url(url),
            None => ContentSource::Dir(root.join(&self.content.dir)),
        };

        Ok(BuildConfig {
            content,
            timeout: Duration::from_secs(self.content.timeout_secs),
            output_dir: root.join(&self.build.output),
            static_dir: Some(root.join(&self.build.static_dir)),
            minify: self.build.minify,
            site: SiteConfig {
                title: self.site.title,
                owner: self.site.owner,
                tagline: self.site.tagline,
                email: self.site.email,
                base_url: self.site.base_url,
                theme,
                skills: self.skills,
                styles: self
                    .site
                    .styles
                    .iter()
                    .map(|s| root.join(s).to_string_lossy().into_owned())
                    .collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("folio.toml"))
            .unwrap()
            .into_build_config(temp.path())
            .unwrap();

        assert_eq!(
            config.content,
            ContentSource::Dir(temp.path().join("."))
        );
        assert_eq!(config.output_dir, temp.path().join("dist"));
        assert_eq!(config.static_dir, Some(temp.path().join("static")));
        assert_eq!(config.site.theme, Theme::Dark);
        assert!(config.minify);
    }

    #[test]
    fn parses_full_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            r#"
[site]
title = "Ada's Work"
owner = "Ada"
email = "ada@example.com"
theme = "light"

[content]
url = "https://ada.example/"
timeout_secs = 3

[build]
output = "public"
minify = false

[[skills]]
name = "Rust"
level = "Advanced"
icon = "bi bi-gear"
"#,
        )
        .unwrap();

        let config = load_config(&path)
            .unwrap()
            .into_build_config(temp.path())
            .unwrap();

        assert_eq!(
            config.content,
            ContentSource::Url("https://ada.example/".to_string())
        );
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.output_dir, temp.path().join("public"));
        assert!(!config.minify);
        assert_eq!(config.site.theme, Theme::Light);
        assert_eq!(config.site.owner, "Ada");
        assert_eq!(config.site.skills.len(), 1);
    }

    #[test]
    fn rejects_unknown_theme() {
        let config: ConfigFile = toml::from_str("[site]\ntheme = \"neon\"").unwrap();
        assert!(config.into_build_config(Path::new(".")).is_err());
    }

    #[test]
    fn config_root_is_the_file_directory() {
        assert_eq!(config_root(Path::new("folio.toml")), Path::new("."));
        assert_eq!(config_root(Path::new("site/folio.toml")), Path::new("site"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("elsewhere");
        let config: ConfigFile =
            toml::from_str(&format!("[build]\noutput = {:?}", output.to_str().unwrap())).unwrap();

        let config = config.into_build_config(Path::new("site")).unwrap();

        assert_eq!(config.output_dir, output);
    }

    #[test]
    fn errors_on_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
