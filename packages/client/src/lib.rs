//! Terminal client for the geo-relay location relay.
//!
//! Connects to the server's WebSocket, prints presence and location events
//! and sends `lat lon` lines typed at the prompt as location reports.

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod runner;

// Re-export entry points
pub use config::ClientConfig;
pub use runner::run_client;
