//! Writing the generated document to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use vitrine_site::SiteDescription;

use crate::generator::{generate_with, GenerateError, GenerateOptions};
use crate::nav::slugify;

/// Result of an export operation.
#[derive(Debug)]
pub struct ExportResult {
    /// Path of the written file
    pub path: PathBuf,

    /// Size of the document in bytes
    pub bytes: usize,

    /// Total export time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Generate the document and write it under `out_dir`.
///
/// The file is named from the slugified brand name (`neon-tech.html`),
/// falling back to `site.html` when the brand has no usable name.
pub fn export_site(
    site: &SiteDescription,
    out_dir: &Path,
    options: &GenerateOptions,
) -> Result<ExportResult, ExportError> {
    let start = Instant::now();

    let html = generate_with(site, options)?;

    fs::create_dir_all(out_dir).map_err(|e| ExportError::Write(e.to_string()))?;

    let path = out_dir.join(format!("{}.html", file_stem(site)));
    fs::write(&path, &html).map_err(|e| ExportError::Write(e.to_string()))?;

    tracing::info!("Exported {}", path.display());

    Ok(ExportResult {
        path,
        bytes: html.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Derive the output file stem from the brand name.
fn file_stem(site: &SiteDescription) -> String {
    let slug = site
        .brand
        .name
        .as_deref()
        .map(slugify)
        .unwrap_or_default();

    if slug.is_empty() {
        "site".to_string()
    } else {
        slug
    }
}
