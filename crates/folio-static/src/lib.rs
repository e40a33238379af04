//! Static site generator for folio portfolios.
//!
//! Loads project and certificate content, renders it into the page's
//! containers and writes a self-contained static site.

pub mod assets;
pub mod builder;
pub mod container;
pub mod page;
pub mod pipeline;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, ContentSource, StaticBuilder};
pub use container::RenderContainer;
pub use page::{PageSummary, PortfolioPage, SiteConfig, Theme};
pub use pipeline::ContentPipeline;
pub use templates::TemplateEngine;
