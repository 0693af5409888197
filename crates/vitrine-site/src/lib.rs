//! Site description model and configuration parsing.
//!
//! This crate defines the [`SiteDescription`] record consumed by the preview
//! generator, the brand color handling (including the hex alpha-suffix
//! convention), and loading of site files from TOML or JSON.

pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
pub mod model;

pub use color::Color;
pub use config::{load_site, parse_site_json_str, parse_site_toml_str};
pub use error::SiteError;
pub use model::{Brand, Content, SiteDescription, SocialLink};
