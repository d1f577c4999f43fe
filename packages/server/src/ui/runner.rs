//! Router construction and server lifecycle.

use std::{future::Future, sync::Arc};

use axum::{Router, http::Method, routing::get};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::ServerConfig,
    error::ServerError,
    ui::{
        handler::{health_check, index, list_sessions, script, websocket_handler},
        relay::RelayHandle,
        signal::shutdown_signal,
        state::{AppState, Heartbeat},
    },
};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(index))
        .route("/js/script.js", get(script))
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/sessions", get(list_sessions))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C / SIGTERM
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, &config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
///
/// A fresh relay (and so a fresh, empty registry) is created per call.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (relay, _relay_task) = RelayHandle::spawn();
    let state = Arc::new(AppState {
        relay,
        heartbeat: Heartbeat::from(config),
    });

    let addr = listener.local_addr()?;
    tracing::info!("Location relay listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
