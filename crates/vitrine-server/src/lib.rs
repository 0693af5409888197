//! Live preview server for vitrine sites.
//!
//! Serves the generated preview document, watches the site file, and pushes
//! WebSocket reload messages to connected previews on every change.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{PreviewServer, PreviewServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
