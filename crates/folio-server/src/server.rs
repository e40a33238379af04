//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use folio_content::ResourceKind;
use folio_static::{BuildConfig, BuildError, ContentSource, PortfolioPage, StaticBuilder};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{live_client_script, LiveHub, LiveMessage};

const LIVE_PATH: &str = "/__live";
const LIVE_SCRIPT_PATH: &str = "/__live.js";

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// How to build the site
    pub build: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

impl DevServerConfig {
    /// Directories whose changes should update the page.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let ContentSource::Dir(dir) = &self.build.content {
            paths.push(dir.join("data"));
        }
        if let Some(static_dir) = &self.build.static_dir {
            paths.push(static_dir.clone());
        }

        paths
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Shared server state.
struct ServerState {
    builder: StaticBuilder,
    page: PortfolioPage,
    hub: LiveHub,
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Build the site and start serving it.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ServerError::InvalidAddress(addr_str.clone(), e.to_string())
            })?;

        let builder = StaticBuilder::new(self.config.build.clone())?;
        let (result, page) = builder.build_page().await?;
        tracing::info!(
            "Built {} projects and {} certificates ({} fallback)",
            result.projects,
            result.certificates,
            result.fallbacks
        );

        let output_dir = builder.config().output_dir.clone();
        let state = Arc::new(RwLock::new(ServerState {
            builder,
            page,
            hub: LiveHub::new(),
        }));

        let (watcher, mut rx) = FileWatcher::new(&self.config.watch_paths())
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state, output_dir);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::debug!("Could not open browser: {}", e);
            }
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: Arc<RwLock<ServerState>>, output_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route(LIVE_PATH, get(ws_handler))
        .route(LIVE_SCRIPT_PATH, get(live_script_handler))
        .fallback_service(ServeDir::new(output_dir))
        .with_state(state)
}

/// Handle file watch events.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    let mut state = state.write().await;

    match event {
        WatchEvent::ContentModified(kind, path) => {
            tracing::info!("Content modified: {}", path.display());

            if let Err(e) = refresh_container(&mut state, kind).await {
                tracing::warn!("Failed to refresh {}: {}", kind, e);
                state.hub.send(LiveMessage::Reload);
            }
        }

        WatchEvent::Created(_) | WatchEvent::Deleted(_) | WatchEvent::Modified(_) => {
            let rebuilt = state.builder.build_page().await;
            match rebuilt {
                Ok((_, page)) => state.page = page,
                Err(e) => tracing::warn!("Rebuild failed: {}", e),
            }
            state.hub.send(LiveMessage::Reload);
        }
    }
}

/// Re-run one kind's pipeline and push the new container content.
async fn refresh_container(state: &mut ServerState, kind: ResourceKind) -> Result<(), BuildError> {
    let ServerState { builder, page, hub } = state;

    let origin = page.refresh(kind, builder.pipeline()).await?;
    builder.write_page(page)?;

    let container = page.container(kind);
    tracing::debug!(
        "Pushing {} cards to #{} ({:?}) for {} client(s)",
        container.len(),
        container.id(),
        origin,
        hub.subscriber_count()
    );

    hub.send(LiveMessage::UpdateContainer {
        container: container.id().to_string(),
        html: container.html().to_string(),
    });

    Ok(())
}

/// Handler for the index page: the built page plus the live update script.
async fn index_handler(State(state): State<Arc<RwLock<ServerState>>>) -> Response {
    let state = state.read().await;

    match state.page.render(state.builder.pipeline().templates()) {
        Ok(html) => Html(inject_live_script(&html)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Insert the live update script before `</body>`.
fn inject_live_script(html: &str) -> String {
    let tag = format!(r#"<script src="{}"></script>"#, LIVE_SCRIPT_PATH);

    match html.rfind("</body>") {
        Some(pos) => format!("{}{}\n{}", &html[..pos], tag, &html[pos..]),
        None => format!("{}{}", html, tag),
    }
}

/// Handler for the live update WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let mut rx = {
        let state = state.read().await;
        state.hub.subscribe()
    };

    if send_message(&mut socket, &LiveMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &LiveMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

/// Handler for the live update client script.
async fn live_script_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        live_client_script(LIVE_PATH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use folio_content::{MemorySource, Origin, RenderState};
    use tempfile::tempdir;

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
    }

    #[test]
    fn watches_data_and_static_dirs() {
        let config = DevServerConfig {
            build: BuildConfig {
                content: ContentSource::Dir(PathBuf::from("site")),
                static_dir: Some(PathBuf::from("site/static")),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            config.watch_paths(),
            vec![PathBuf::from("site/data"), PathBuf::from("site/static")]
        );
    }

    #[test]
    fn does_not_watch_remote_content() {
        let config = DevServerConfig {
            build: BuildConfig {
                content: ContentSource::Url("https://example.com/".to_string()),
                static_dir: None,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.watch_paths().is_empty());
    }

    #[test]
    fn injects_script_before_body_close() {
        let html = "<html><body><p>hi</p></body></html>";

        let injected = inject_live_script(html);

        assert!(injected.contains(r#"<script src="/__live.js"></script>"#));
        assert!(injected.find("__live.js").unwrap() < injected.find("</body>").unwrap());
    }

    #[tokio::test]
    async fn content_change_pushes_container_update() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("data")).unwrap();

        let config = BuildConfig {
            content: ContentSource::Dir(temp.path().to_path_buf()),
            output_dir: temp.path().join("dist"),
            static_dir: None,
            ..Default::default()
        };
        let builder = StaticBuilder::new(config).unwrap();
        let (_, page) = builder.build_page().await.unwrap();
        assert_eq!(page.projects().len(), 3);

        let hub = LiveHub::new();
        let mut rx = hub.subscribe();
        let mut state = ServerState { builder, page, hub };

        fs::write(
            temp.path().join("data/projects.json"),
            r#"[{"title": "Fresh", "image": "f.png", "description": "new", "live": "https://f.example"}]"#,
        )
        .unwrap();

        refresh_container(&mut state, ResourceKind::Projects)
            .await
            .unwrap();

        assert_eq!(
            state.page.projects().state(),
            RenderState::Rendered(Origin::Network)
        );
        match rx.try_recv() {
            Ok(LiveMessage::UpdateContainer { container, html }) => {
                assert_eq!(container, "projectsContainer");
                assert!(html.contains("Fresh"));
            }
            other => panic!("Expected container update, got {:?}", other),
        }

        let written = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(written.contains("Fresh"));
    }

    #[tokio::test]
    async fn serves_index_with_live_script() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::with_source(
            BuildConfig {
                output_dir: temp.path().join("dist"),
                static_dir: None,
                ..Default::default()
            },
            Arc::new(MemorySource::new()),
        );
        let (_, page) = builder.build_page().await.unwrap();
        let state = Arc::new(RwLock::new(ServerState {
            builder,
            page,
            hub: LiveHub::new(),
        }));

        let response = index_handler(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
