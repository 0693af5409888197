//! Live preview command.

use std::path::PathBuf;

use anyhow::Result;
use vitrine_server::{PreviewServer, PreviewServerConfig};

/// Run the preview server.
pub async fn run(site: PathBuf, port: u16, open: bool) -> Result<()> {
    if !site.exists() {
        anyhow::bail!(
            "Site file not found: {}. Run 'vitrine init' first.",
            site.display()
        );
    }

    tracing::info!("Starting preview server on port {}", port);

    let config = PreviewServerConfig {
        site_path: site,
        port,
        open,
        ..Default::default()
    };

    PreviewServer::new(config).start().await?;

    Ok(())
}
