//! Development server for folio portfolios.
//!
//! Serves the built site, watches content and static files, and pushes
//! re-rendered containers to open pages over a WebSocket.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{LiveHub, LiveMessage};
