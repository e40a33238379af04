//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_static::StaticBuilder;

use crate::config::{config_root, load_config};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building portfolio...");

    let mut config = load_config(config_path)?.into_build_config(config_root(config_path))?;
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = StaticBuilder::new(config)?.build().await?;

    tracing::info!(
        "Rendered {} projects and {} certificates in {}ms",
        result.projects,
        result.certificates,
        result.duration_ms
    );

    if result.fallbacks > 0 {
        tracing::warn!(
            "{} content resource(s) unavailable, built-in content was used",
            result.fallbacks
        );
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
