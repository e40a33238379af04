//! Render containers.

use folio_content::{Origin, RenderState, ResourceKind};

/// The element that holds every card for one resource kind.
///
/// Content is only ever replaced wholesale.
#[derive(Debug, Clone)]
pub struct RenderContainer {
    kind: ResourceKind,
    state: RenderState,
    html: String,
    len: usize,
}

impl RenderContainer {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            state: RenderState::NotStarted,
            html: String::new(),
            len: 0,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Element id of this container.
    pub fn id(&self) -> &'static str {
        self.kind.container_id()
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Current inner HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of cards currently rendered.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark the container as waiting on its resource.
    pub fn begin_fetch(&mut self) {
        self.state = RenderState::Fetching;
    }

    /// Replace the container's content.
    pub fn fill(&mut self, html: String, len: usize, origin: Origin) {
        self.html = html;
        self.len = len;
        self.state = RenderState::Rendered(origin);
    }
}
