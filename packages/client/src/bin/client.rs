//! Terminal client for the geo-relay location relay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin geo-relay-client -- --url ws://127.0.0.1:3002/ws
//! ```

use clap::Parser;
use geo_relay_client::ClientConfig;
use geo_relay_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    if let Err(e) = geo_relay_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
