//! Per-container render state.

use serde::Serialize;

/// Where a rendered list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Parsed from the fetched resource
    Network,
    /// Built-in fallback sequence
    Fallback,
}

/// Lifecycle of a render container for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    NotStarted,
    Fetching,
    Rendered(Origin),
}

impl RenderState {
    /// Origin of the rendered content, if any.
    pub fn origin(&self) -> Option<Origin> {
        match self {
            RenderState::Rendered(origin) => Some(*origin),
            _ => None,
        }
    }
}
