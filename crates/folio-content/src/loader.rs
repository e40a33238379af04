//! Fallback-aware content loading.

use std::sync::Arc;

use crate::kind::ContentKind;
use crate::source::{ResourceSource, ResourceUnavailable};
use crate::state::Origin;

/// A list ready to render, with the place it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub origin: Origin,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }
}

/// Loads content lists from a source.
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ResourceSource>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self { source }
    }

    /// Location the loader reads from.
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Fetch and parse the resource for `K`, without falling back.
    pub async fn fetch<K: ContentKind>(&self) -> Result<Vec<K::Item>, ResourceUnavailable> {
        let body = self.source.fetch(K::KIND).await?;

        serde_json::from_slice(&body)
            .map_err(|e| ResourceUnavailable::new(K::KIND, format!("invalid JSON: {}", e)))
    }

    /// Load the list for `K`, substituting its fallback on any failure.
    pub async fn load<K: ContentKind>(&self) -> Loaded<K::Item> {
        match self.fetch::<K>().await {
            Ok(items) => {
                tracing::debug!("Loaded {} {} from {}", items.len(), K::KIND, self.describe());
                Loaded {
                    items,
                    origin: Origin::Network,
                }
            }
            Err(e) => {
                tracing::warn!("Error loading {}: {}; using fallback", K::KIND, e);
                Loaded {
                    items: K::fallback(),
                    origin: Origin::Fallback,
                }
            }
        }
    }
}
