//! Resource kinds.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::fallback::{fallback_certificates, fallback_projects};
use crate::models::{Certificate, Project};

/// One of the independently loaded content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Projects,
    Certificates,
}

impl ResourceKind {
    /// All kinds, in page order.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Projects, ResourceKind::Certificates];

    /// Path of the JSON resource, relative to the content root.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "data/projects.json",
            ResourceKind::Certificates => "data/certificates.json",
        }
    }

    /// Element id of the container the cards are written into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "projectsContainer",
            ResourceKind::Certificates => "certificatesContainer",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Projects => "projects",
            ResourceKind::Certificates => "certificates",
        }
    }

    /// Match a resource file name (e.g. `projects.json`) to its kind.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path().rsplit('/').next() == Some(name))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-level binding between a resource kind, its record type and its
/// fallback sequence.
pub trait ContentKind: Send + Sync + 'static {
    /// Record type stored in the resource array.
    type Item: DeserializeOwned + Serialize + Clone + Send + Sync + 'static;

    const KIND: ResourceKind;

    /// Fixed list used when the resource is unavailable.
    fn fallback() -> Vec<Self::Item>;
}

/// Project list marker.
pub struct Projects;

impl ContentKind for Projects {
    type Item = Project;

    const KIND: ResourceKind = ResourceKind::Projects;

    fn fallback() -> Vec<Project> {
        fallback_projects()
    }
}

/// Certificate list marker.
pub struct Certificates;

impl ContentKind for Certificates {
    type Item = Certificate;

    const KIND: ResourceKind = ResourceKind::Certificates;

    fn fallback() -> Vec<Certificate> {
        fallback_certificates()
    }
}
