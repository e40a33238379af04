//! Load-and-render pipeline for one resource kind.

use std::sync::Arc;

use folio_content::{ContentKind, ContentLoader, Origin};

use crate::builder::BuildError;
use crate::container::RenderContainer;
use crate::templates::TemplateEngine;

/// Fetches a resource (or its fallback) and writes its cards into a container.
#[derive(Clone)]
pub struct ContentPipeline {
    loader: ContentLoader,
    templates: Arc<TemplateEngine>,
}

impl ContentPipeline {
    pub fn new(loader: ContentLoader, templates: Arc<TemplateEngine>) -> Self {
        Self { loader, templates }
    }

    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    /// Load the list for `K` and replace `container`'s content with its cards.
    ///
    /// Resource failures never surface here; only a template failure does.
    pub async fn load_and_render<K: ContentKind>(
        &self,
        container: &mut RenderContainer,
    ) -> Result<Origin, BuildError> {
        debug_assert_eq!(container.kind(), K::KIND);

        container.begin_fetch();
        let loaded = self.loader.load::<K>().await;

        let html = self
            .templates
            .render_cards(K::KIND, &loaded.items)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        container.fill(html, loaded.items.len(), loaded.origin);

        tracing::debug!(
            "Rendered {} {} into #{} ({:?})",
            loaded.items.len(),
            K::KIND,
            container.id(),
            loaded.origin
        );

        Ok(loaded.origin)
    }
}
