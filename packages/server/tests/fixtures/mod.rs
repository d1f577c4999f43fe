//! Test fixtures for integration tests.
//!
//! Starts the real router on an ephemeral port and offers a small
//! WebSocket client that decodes server frames.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use futures_util::{SinkExt, StreamExt};
use geo_relay_server::{
    ServerConfig,
    infrastructure::dto::websocket::{ServerMessage, decode_server_message},
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message,
};

/// How long a test waits for an expected frame
pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Running server, stopped on drop
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    pub async fn start_with(config: ServerConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            geo_relay_server::serve(listener, &config, shutdown)
                .await
                .expect("Server failed");
        });

        Self {
            addr,
            shutdown: Some(shutdown_tx),
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.task.abort();
    }
}

/// WebSocket test client
pub struct TestClient {
    pub id: String,
    ws: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl TestClient {
    /// Connect and consume the `session-assigned` frame
    ///
    /// The `connected-users` frame that follows is left in the stream.
    pub async fn connect(server: &TestServer) -> Self {
        let (ws, _) = connect_async(server.ws_url())
            .await
            .expect("Failed to connect");
        let mut client = Self {
            id: String::new(),
            ws,
        };
        match client.recv().await {
            ServerMessage::SessionAssigned(msg) => client.id = msg.id,
            other => panic!("expected session-assigned, got {other:?}"),
        }
        client
    }

    /// Next decoded server frame, skipping control frames
    pub async fn recv(&mut self) -> ServerMessage {
        loop {
            let frame = tokio::time::timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for a frame")
                .expect("Stream ended")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return decode_server_message(text.as_str()).expect("Undecodable frame");
            }
        }
    }

    /// Assert that no text frame arrives within `wait`
    pub async fn expect_silence(&mut self, wait: Duration) {
        loop {
            match tokio::time::timeout(wait, self.ws.next()).await {
                Err(_) => return,
                Ok(Some(Ok(Message::Text(text)))) => panic!("unexpected frame: {}", text.as_str()),
                Ok(Some(Ok(_))) => continue,
                Ok(other) => panic!("connection ended: {other:?}"),
            }
        }
    }

    pub async fn send_text(&mut self, text: &str) {
        self.ws
            .send(Message::Text(text.to_string().into()))
            .await
            .expect("Failed to send");
    }

    pub async fn send_location(&mut self, latitude: f64, longitude: f64) {
        let frame = serde_json::json!({
            "type": "send-location",
            "latitude": latitude,
            "longitude": longitude,
        });
        self.send_text(&frame.to_string()).await;
    }

    pub async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}
