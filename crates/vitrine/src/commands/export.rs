//! Site export command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use vitrine_site::load_site;
use vitrine_static::{export_site, GenerateOptions};

/// Run the export command.
pub async fn run(site_path: PathBuf, output: PathBuf, minify: bool) -> Result<()> {
    tracing::info!("Exporting site...");

    let site = load_site(&site_path)
        .with_context(|| format!("Failed to load {}", site_path.display()))?;

    let options = GenerateOptions { minify_css: minify };

    let result = export_site(&site, &output, &options)?;

    tracing::info!(
        "Wrote {} ({} bytes) in {}ms",
        result.path.display(),
        result.bytes,
        result.duration_ms
    );

    Ok(())
}
