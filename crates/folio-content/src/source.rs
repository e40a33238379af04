//! Places content resources are fetched from.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::kind::ResourceKind;

/// A resource could not be fetched or parsed.
///
/// Network errors, error statuses, missing files and malformed JSON all map to
/// this one error; callers only care that the resource is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} resource unavailable: {reason}")]
pub struct ResourceUnavailable {
    pub kind: ResourceKind,
    pub reason: String,
}

impl ResourceUnavailable {
    pub fn new(kind: ResourceKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while configuring a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Invalid base URL {0}: {1}")]
    InvalidUrl(String, String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Something that can produce the raw body of a content resource.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Human readable location, used in logs.
    fn describe(&self) -> String;

    /// Fetch the raw bytes of the resource for `kind`.
    async fn fetch(&self, kind: ResourceKind) -> Result<Vec<u8>, ResourceUnavailable>;
}

/// Fetches resources over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base = Url::parse(&normalized)
            .map_err(|e| SourceError::InvalidUrl(base_url.to_string(), e.to_string()))?;

        let client = Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Client(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// Full URL of the resource for `kind`.
    pub fn url_for(&self, kind: ResourceKind) -> Result<Url, ResourceUnavailable> {
        self.base
            .join(kind.path())
            .map_err(|e| ResourceUnavailable::new(kind, e.to_string()))
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    async fn fetch(&self, kind: ResourceKind) -> Result<Vec<u8>, ResourceUnavailable> {
        let url = self.url_for(kind)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResourceUnavailable::new(kind, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceUnavailable::new(kind, format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ResourceUnavailable::new(kind, e.to_string()))?;

        Ok(body.to_vec())
    }
}

/// Reads resources from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// On-disk path of the resource for `kind`.
    pub fn path_for(&self, kind: ResourceKind) -> PathBuf {
        self.root.join(kind.path())
    }
}

#[async_trait]
impl ResourceSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, kind: ResourceKind) -> Result<Vec<u8>, ResourceUnavailable> {
        let path = self.path_for(kind);
        tokio::fs::read(&path)
            .await
            .map_err(|e| ResourceUnavailable::new(kind, format!("{}: {}", path.display(), e)))
    }
}

/// Serves resource bodies held in memory.
///
/// A kind without a body behaves like a failed request.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bodies: HashMap<ResourceKind, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body served for `kind`.
    pub fn with(mut self, kind: ResourceKind, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(kind, body.into());
        self
    }
}

#[async_trait]
impl ResourceSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self, kind: ResourceKind) -> Result<Vec<u8>, ResourceUnavailable> {
        self.bodies
            .get(&kind)
            .cloned()
            .ok_or_else(|| ResourceUnavailable::new(kind, "no body registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use axum::{http::StatusCode, routing::get, Router};
    use tempfile::tempdir;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn http_source_fetches_relative_to_base() {
        let app = Router::new().route("/site/data/projects.json", get(|| async { "[]" }));
        let base = spawn_server(app).await;

        let source = HttpSource::new(&format!("{}/site", base), Duration::from_secs(5)).unwrap();
        let body = source.fetch(ResourceKind::Projects).await.unwrap();

        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn http_source_rejects_error_status() {
        let app = Router::new().route(
            "/data/certificates.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_server(app).await;

        let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
        let err = source.fetch(ResourceKind::Certificates).await.unwrap_err();

        assert_eq!(err.kind, ResourceKind::Certificates);
        assert!(err.reason.contains("500"));
    }

    #[tokio::test]
    async fn http_source_reports_connection_failure() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source =
            HttpSource::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let result = source.fetch(ResourceKind::Projects).await;

        assert!(result.is_err());
    }

    #[test]
    fn http_source_rejects_invalid_base() {
        let result = HttpSource::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(SourceError::InvalidUrl(_, _))));
    }

    #[tokio::test]
    async fn dir_source_reads_data_files() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::write(temp.path().join("data/projects.json"), "[1]").unwrap();

        let source = DirSource::new(temp.path());

        assert_eq!(source.fetch(ResourceKind::Projects).await.unwrap(), b"[1]");
        assert!(source.fetch(ResourceKind::Certificates).await.is_err());
    }

    #[tokio::test]
    async fn memory_source_fails_for_missing_kind() {
        let source = MemorySource::new().with(ResourceKind::Projects, "[]");

        assert!(source.fetch(ResourceKind::Projects).await.is_ok());
        let err = source.fetch(ResourceKind::Certificates).await.unwrap_err();
        assert_eq!(err.kind, ResourceKind::Certificates);
    }
}
