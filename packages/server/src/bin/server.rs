//! Real-time location relay server.
//!
//! Tracks connected clients and broadcasts every reported location to all of them.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin geo-relay-server -- --port 3002
//! ```

use clap::Parser;
use geo_relay_server::ServerConfig;
use geo_relay_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = geo_relay_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
