//! Development server command.

use std::path::Path;

use anyhow::Result;
use folio_server::{DevServer, DevServerConfig};

use crate::config::{config_root, load_config};

/// Run the dev server.
pub async fn run(config_path: &Path, host: String, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on {}:{}", host, port);

    let build = load_config(config_path)?.into_build_config(config_root(config_path))?;

    let config = DevServerConfig {
        build,
        port,
        host,
        open,
    };

    DevServer::new(config).start().await?;

    Ok(())
}
