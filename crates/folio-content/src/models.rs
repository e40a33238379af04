//! Content records.

use serde::{Deserialize, Serialize};

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub title: String,
    /// Preview image URL
    pub image: String,
    /// Short description
    pub description: String,
    /// Live demo URL
    pub live: String,
}

/// A certificate thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate name
    pub title: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Verification URL
    pub url: String,
}

/// A skill badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
    /// Icon CSS classes, e.g. `bi bi-git`
    pub icon: String,
}

impl Skill {
    pub fn new(name: &str, level: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            level: level.to_string(),
            icon: icon.to_string(),
        }
    }
}
