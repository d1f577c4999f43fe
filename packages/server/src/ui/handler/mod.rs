//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod page;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{health_check, list_sessions};

// Re-export page handlers
pub use page::{index, script};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
