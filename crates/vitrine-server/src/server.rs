//! Preview server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::RwLock;

use vitrine_site::load_site;
use vitrine_static::generate;

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    /// Site description file to preview
    pub site_path: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            site_path: PathBuf::from("site.toml"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: PreviewServerConfig,
    hub: ReloadHub,
}

/// Live preview server.
pub struct PreviewServer {
    config: PreviewServerConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewServerConfig) -> Self {
        Self { config }
    }

    /// Start the preview server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            hub: ReloadHub::new(),
        }));

        // Watch the directory holding the site file so editor
        // rename-and-replace saves are still observed
        let watch_root = self
            .config
            .site_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let (watcher, mut rx) = FileWatcher::new(&[watch_root])
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = Router::new()
            .route("/", get(index_handler))
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .with_state(state);

        tracing::info!("Previewing {} at http://{}", self.config.site_path.display(), addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    let state = state.read().await;

    match event {
        WatchEvent::SiteModified(path) => {
            tracing::info!("Site description modified: {}", path.display());
            state.hub.send(ReloadMessage::Reload);
        }

        WatchEvent::Created(_) | WatchEvent::Deleted(_) | WatchEvent::Modified(_) => {
            state.hub.send(ReloadMessage::Reload);
        }
    }
}

/// Handler for the preview page.
///
/// Re-loads the site file and re-generates the document on every request,
/// so the preview always reflects the latest save. Failures render as an
/// error page instead of breaking the reload loop.
async fn index_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;

    let html = match load_site(&state.config.site_path) {
        Ok(site) => match generate(&site) {
            Ok(html) => html,
            Err(e) => error_page(&format!("Failed to generate preview: {}", e)),
        },
        Err(e) => error_page(&format!(
            "Failed to load {}: {}",
            state.config.site_path.display(),
            e
        )),
    };

    Html(inject_reload_script(&html))
}

/// Inject the reload client into a generated document.
fn inject_reload_script(html: &str) -> String {
    let snippet = "<script src=\"/__reload.js\"></script>\n</body>";

    if html.contains("</body>") {
        html.replacen("</body>", snippet, 1)
    } else {
        format!("{}\n<script src=\"/__reload.js\"></script>", html)
    }
}

/// Minimal page shown when the site cannot be previewed.
fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Vitrine Preview</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 4rem auto; padding: 0 1rem; }}
    pre {{ background: #f5f5f5; padding: 1rem; border-radius: 0.5rem; white-space: pre-wrap; }}
  </style>
</head>
<body>
  <h1>Preview unavailable</h1>
  <pre>{}</pre>
  <p>Fix the site file and save; the preview reloads automatically.</p>
</body>
</html>"#,
        html_escape(message)
    )
}

/// Escape text for embedding in the error page.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let mut rx = {
        let state = state.read().await;
        state.hub.subscribe()
    };

    // Send connected message
    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    // Forward reload messages to the client
    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    let state = state.read().await;
    let ws_url = format!(
        "ws://{}:{}/__reload",
        state.config.host, state.config.port
    );

    let script = reload_client_script(&ws_url);
    ([("content-type", "application/javascript")], script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_server_with_default_config() {
        let server = PreviewServer::new(PreviewServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.site_path, PathBuf::from("site.toml"));
    }

    #[test]
    fn injects_reload_script_once_before_body_close() {
        let html = "<html><body><p>hi</p></body></html>";
        let injected = inject_reload_script(html);

        assert_eq!(injected.matches("/__reload.js").count(), 1);
        assert!(injected.contains("<script src=\"/__reload.js\"></script>\n</body>"));
    }

    #[test]
    fn appends_script_when_document_has_no_body_close() {
        let injected = inject_reload_script("<p>fragment</p>");
        assert!(injected.contains("/__reload.js"));
    }

    #[test]
    fn error_page_escapes_message() {
        let page = error_page("bad <tag> & more");
        assert!(page.contains("bad &lt;tag&gt; &amp; more"));
        assert!(!page.contains("bad <tag>"));
    }
}
