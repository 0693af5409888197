//! The site description record.

use serde::{Deserialize, Serialize};

/// Everything the generator needs to know about a brand.
///
/// Every field is optional; fallbacks from [`crate::defaults`] are
/// substituted at generation time. The record deserializes from `site.toml`
/// or from the JSON form an editor sends over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDescription {
    /// Brand identity and palette
    #[serde(default)]
    pub brand: Brand,

    /// Long-form page content
    #[serde(default)]
    pub content: Content,

    /// Social/contact links, in display order
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Page names, used for nav generation only
    #[serde(default)]
    pub pages: Vec<String>,
}

/// Brand identity: name, copy, and the three-color palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub tagline: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// CSS color token (hex or named); normalized at generation time
    #[serde(default)]
    pub primary_color: Option<String>,

    #[serde(default)]
    pub secondary_color: Option<String>,

    #[serde(default)]
    pub accent_color: Option<String>,
}

/// Long-form content sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// About-section body; markdown is allowed
    #[serde(default)]
    pub about: Option<String>,
}

/// A labelled link. Labels need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Resolve an optional text field, treating blank values as missing.
pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback,
    }
}
