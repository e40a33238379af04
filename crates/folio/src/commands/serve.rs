//! Preview server command.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
pub async fn run(host: &str, port: u16, dir: PathBuf) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'folio build' first.",
            dir.display()
        );
    }

    if !dir.join("index.html").exists() {
        tracing::warn!("No index.html in {}", dir.display());
    }

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app =
        Router::new().fallback_service(ServeDir::new(&dir).append_index_html_on_directories(true));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    if let Err(e) = open::that(format!("http://{}", addr)) {
        tracing::debug!("Could not open browser: {}", e);
    }

    axum::serve(listener, app).await?;

    Ok(())
}
