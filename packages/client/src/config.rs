//! Client configuration (command line).

use clap::Parser;

/// geo-relay terminal client options
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct ClientConfig {
    /// WebSocket endpoint of the relay
    #[arg(short, long, default_value = "ws://127.0.0.1:3002/ws")]
    pub url: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
