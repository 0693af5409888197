//! Single-file site preview generator.
//!
//! Turns a [`vitrine_site::SiteDescription`] into one complete, self-contained
//! HTML document: inline stylesheet, hero/about/services/contact sections,
//! and the fixed watermark footer.

pub mod export;
pub mod generator;
pub mod nav;
pub mod templates;
pub mod theme;

pub use export::{export_site, ExportError, ExportResult};
pub use generator::{generate, generate_with, GenerateError, GenerateOptions};
pub use nav::NavItem;
pub use templates::WATERMARK;
pub use theme::Theme;
