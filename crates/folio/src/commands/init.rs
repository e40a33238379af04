//! Scaffold a starter portfolio.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::config_root;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    scaffold(config_root(config_path), config_path, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio dev' to start the development server.");

    Ok(())
}

fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<()> {
    if config_path.exists() && !overwrite {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    write_file(config_path, DEFAULT_CONFIG, overwrite)?;

    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
    write_file(&data_dir.join("projects.json"), DEFAULT_PROJECTS, overwrite)?;
    write_file(
        &data_dir.join("certificates.json"),
        DEFAULT_CERTIFICATES,
        overwrite,
    )?;

    let static_dir = root.join("static");
    if !static_dir.exists() {
        fs::create_dir_all(&static_dir).context("Failed to create static directory")?;
        tracing::info!("Created {}", static_dir.display());
    }

    Ok(())
}

fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::debug!("Keeping existing {}", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
title = "My Portfolio"
owner = "Your Name"
tagline = "Developer, builder, learner."
# email = "you@example.com"
base_url = "/"
theme = "dark"

[content]
# Directory containing data/projects.json and data/certificates.json
dir = "."
# Fetch content over HTTP instead:
# url = "https://example.com/"
timeout_secs = 10

[build]
output = "dist"
static_dir = "static"
minify = true

# Leave out to use the built-in skill list.
# [[skills]]
# name = "Rust"
# level = "Intermediate"
# icon = "bi bi-gear"
"#;

const DEFAULT_PROJECTS: &str = r#"[
  {
    "title": "First Project",
    "image": "./project.png",
    "description": "What it is and what you learned building it.",
    "live": "https://example.com/first-project/"
  }
]
"#;

const DEFAULT_CERTIFICATES: &str = r#"[
  {
    "title": "Responsive Web Design",
    "thumbnail": "./certificate.png",
    "url": "https://example.com/certificates/responsive-web-design"
  }
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{Certificate, Project};
    use tempfile::tempdir;

    #[test]
    fn scaffolds_loadable_content() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("folio.toml");

        scaffold(temp.path(), &config, false).unwrap();

        assert!(config.exists());
        assert!(temp.path().join("static").is_dir());

        let projects: Vec<Project> = serde_json::from_str(
            &fs::read_to_string(temp.path().join("data/projects.json")).unwrap(),
        )
        .unwrap();
        let certificates: Vec<Certificate> = serde_json::from_str(
            &fs::read_to_string(temp.path().join("data/certificates.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(certificates.len(), 1);
    }

    #[test]
    fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("folio.toml");
        fs::write(&config, "# mine").unwrap();

        scaffold(temp.path(), &config, false).unwrap();

        assert_eq!(fs::read_to_string(&config).unwrap(), "# mine");
        assert!(!temp.path().join("data").exists());
    }

    #[tokio::test]
    async fn scaffold_in_subdirectory_builds_without_fallback() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("site");
        fs::create_dir_all(&root).unwrap();
        let config_path = root.join("folio.toml");

        scaffold(config_root(&config_path), &config_path, false).unwrap();

        let build = crate::config::load_config(&config_path)
            .unwrap()
            .into_build_config(config_root(&config_path))
            .unwrap();
        assert_eq!(build.output_dir, root.join("dist"));

        let result = folio_static::StaticBuilder::new(build)
            .unwrap()
            .build()
            .await
            .unwrap();

        assert_eq!(result.fallbacks, 0);
        assert_eq!(result.projects, 1);
        assert!(root.join("dist/index.html").exists());
    }

    #[test]
    fn default_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.site.owner, "Your Name");
        assert!(config.skills.is_empty());
    }
}
