//! Server state shared by the HTTP and WebSocket handlers.

use std::time::Duration;

use crate::{config::ServerConfig, ui::relay::RelayHandle};

/// Per-connection liveness settings
#[derive(Debug, Clone, Copy)]
pub struct Heartbeat {
    /// Interval between server pings
    pub ping_interval: Duration,
    /// Silence after which a connection is closed
    pub idle_timeout: Duration,
}

impl From<&ServerConfig> for Heartbeat {
    fn from(config: &ServerConfig) -> Self {
        Self {
            ping_interval: config.ping_interval(),
            idle_timeout: config.idle_timeout(),
        }
    }
}

/// Shared application state
pub struct AppState {
    /// Sender side of the relay task that owns the session registry
    pub relay: RelayHandle,
    pub heartbeat: Heartbeat,
}
