//! Serve an exported site directory.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'vitrine export' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Open the exported document directly; the export is a single file,
    // not an index.html tree
    let url = match first_html_file(&dir) {
        Some(name) => format!("http://{}/{}", addr, name),
        None => format!("http://{}", addr),
    };
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Find the first exported .html file in the directory, in name order.
fn first_html_file(dir: &Path) -> Option<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".html"))
        .collect();

    names.sort();
    names.into_iter().next()
}
