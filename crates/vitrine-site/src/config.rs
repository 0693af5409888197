//! Loading site descriptions from disk.
//!
//! The authored form is `site.toml`; editors exchange the same structure as
//! JSON. Every section and field is optional, so an empty file is a valid
//! (fully defaulted) site.

use std::fs;
use std::path::Path;

use crate::error::{Result, SiteError};
use crate::model::SiteDescription;

/// Load a site description from a file path.
///
/// `.json` files parse as JSON; everything else parses as TOML.
pub fn load_site<P: AsRef<Path>>(path: P) -> Result<SiteDescription> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("json") {
        parse_site_json_str(&content)
    } else {
        parse_site_toml_str(&content)
    }
}

/// Parse a site description from TOML (useful for testing).
pub fn parse_site_toml_str(content: &str) -> Result<SiteDescription> {
    toml::from_str(content).map_err(|e| SiteError::Toml(e.to_string()))
}

/// Parse a site description from the JSON interchange form.
pub fn parse_site_json_str(content: &str) -> Result<SiteDescription> {
    serde_json::from_str(content).map_err(|e| SiteError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_site_toml() {
        let toml = r##"
pages = ["Home", "About", "Contact"]

[brand]
name = "Neon Tech"
tagline = "Luxury digital identity"
description = "The platform for discerning brands."
primary_color = "#00E5FF"
secondary_color = "#7C4DFF"
accent_color = "hotpink"

[content]
about = "We make **beautiful** things."

[[social]]
label = "Instagram"
url = "https://instagram.com/neontech"

[[social]]
label = "X"
url = "https://x.com/neontech"
        "##;

        let site = parse_site_toml_str(toml).unwrap();

        assert_eq!(site.brand.name.as_deref(), Some("Neon Tech"));
        assert_eq!(site.brand.accent_color.as_deref(), Some("hotpink"));
        assert_eq!(site.social.len(), 2);
        assert_eq!(site.social[0].label, "Instagram");
        assert_eq!(site.pages, vec!["Home", "About", "Contact"]);
    }

    #[test]
    fn empty_toml_is_a_valid_site() {
        let site = parse_site_toml_str("").unwrap();
        assert_eq!(site, SiteDescription::default());
    }

    #[test]
    fn partial_sections_default_the_rest() {
        let site = parse_site_toml_str("[brand]\nname = \"Solo\"\n").unwrap();

        assert_eq!(site.brand.name.as_deref(), Some("Solo"));
        assert!(site.brand.tagline.is_none());
        assert!(site.social.is_empty());
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = parse_site_toml_str("[brand\nname=");
        assert!(matches!(result, Err(SiteError::Toml(_))));
    }

    #[test]
    fn parses_editor_json() {
        let json = r##"{
            "brand": { "name": "Neon Tech", "primary_color": "#00E5FF" },
            "social": [{ "label": "Instagram", "url": "https://instagram.com/neontech" }],
            "pages": ["Home"]
        }"##;

        let site = parse_site_json_str(json).unwrap();

        assert_eq!(site.brand.name.as_deref(), Some("Neon Tech"));
        assert_eq!(site.social[0].url, "https://instagram.com/neontech");
    }

    #[test]
    fn rejects_malformed_json() {
        let result = parse_site_json_str("{ brand: }");
        assert!(matches!(result, Err(SiteError::Json(_))));
    }
}
