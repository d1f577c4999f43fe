//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::{sync::mpsc, time};

use crate::{
    domain::{SessionId, SessionIdFactory},
    infrastructure::dto::websocket::decode_send_location,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // The transport assigns the session id
    let session_id = SessionIdFactory::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, session_id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, session_id: SessionId) {
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this client to receive relay events
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    if let Err(e) = state.relay.open(session_id.clone(), Box::new(tx)) {
        tracing::error!("Cannot register client '{}': {}", session_id, e);
        return;
    }
    tracing::info!("Client '{}' connected", session_id);

    let heartbeat = state.heartbeat;

    // Spawn a task to forward relay events to this client and keep it pinged
    let mut send_task = tokio::spawn(async move {
        let mut ping = time::interval(heartbeat.ping_interval);
        ping.tick().await; // First tick fires immediately; skip it.

        loop {
            tokio::select! {
                msg = rx.recv() => {
                    let Some(msg) = msg else { break };
                    if sender.send(Message::Text(msg.into())).await.is_err() {
                        break;
                    }
                }
                _ = ping.tick() => {
                    if sender.send(Message::Ping(Bytes::new())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Spawn a task to receive location reports from this client
    let relay = state.relay.clone();
    let client_id = session_id.clone();
    let mut recv_task = tokio::spawn(async move {
        loop {
            let msg = match time::timeout(heartbeat.idle_timeout, receiver.next()).await {
                Ok(Some(Ok(msg))) => msg,
                Ok(Some(Err(e))) => {
                    tracing::debug!("WebSocket error from '{}': {}", client_id, e);
                    break;
                }
                Ok(None) => break,
                Err(_) => {
                    tracing::info!("Client '{}' timed out", client_id);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match decode_send_location(text.as_str()) {
                    Ok(coordinates) => {
                        if relay.send_location(client_id.clone(), coordinates).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Dropping message from '{}': {}", client_id, e);
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", client_id);
                    break;
                }
                // Pings, pongs and binary frames only count as activity
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if let Err(e) = state.relay.close(session_id.clone()) {
        tracing::warn!("Cannot unregister client '{}': {}", session_id, e);
        return;
    }
    tracing::info!("Client '{}' disconnected", session_id);
}
