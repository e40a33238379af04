//! Portfolio content loading.
//!
//! This crate defines the project and certificate records shown on a portfolio
//! page, the sources they can be fetched from, and the loader that substitutes
//! a fixed fallback list whenever a resource cannot be fetched or parsed.

pub mod fallback;
pub mod kind;
pub mod loader;
pub mod models;
pub mod source;
pub mod state;

pub use fallback::{default_skills, fallback_certificates, fallback_projects};
pub use kind::{Certificates, ContentKind, Projects, ResourceKind};
pub use loader::{ContentLoader, Loaded};
pub use models::{Certificate, Project, Skill};
pub use source::{
    DirSource, HttpSource, MemorySource, ResourceSource, ResourceUnavailable, SourceError,
};
pub use state::{Origin, RenderState};
