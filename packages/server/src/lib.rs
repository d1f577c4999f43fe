//! Real-time location relay library.
//!
//! Clients report their coordinates over a WebSocket; the server keeps the
//! set of live sessions and fans every update out to all connections.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::{run, serve};
