//! Errors for site file loading.

/// Errors that can occur when loading a site description.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read site file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in site file: {0}")]
    Toml(String),

    #[error("Invalid JSON site description: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
