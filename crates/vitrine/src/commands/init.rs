//! Scaffold a starter site file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    let site_path = Path::new("site.toml");

    if site_path.exists() && !yes {
        tracing::warn!("site.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(site_path, STARTER_SITE).context("Failed to write site.toml")?;
    tracing::info!("Created site.toml");

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'vitrine preview' to open the live preview.");

    Ok(())
}

const STARTER_SITE: &str = r##"# Vitrine site description
#
# Every field is optional; anything left out falls back to a sensible
# default in the generated preview.

pages = ["Home", "About", "Services", "Contact"]

[brand]
name = "Aurora Atelier"
tagline = "Quiet luxury, loud results."
description = "A boutique studio crafting digital identities for brands that refuse to blend in."
primary_color = "#00E5FF"
secondary_color = "#7C4DFF"
accent_color = "#FF4081"

[content]
about = """
Aurora Atelier pairs restrained design with meticulous execution.

We take on a handful of clients at a time and give each one a presence
worth remembering.
"""

[[social]]
label = "Instagram"
url = "https://instagram.com/your-handle"

[[social]]
label = "LinkedIn"
url = "https://linkedin.com/company/your-company"
"##;
