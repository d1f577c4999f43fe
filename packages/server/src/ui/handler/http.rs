//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::{http::SessionListDto, websocket::SessionInfo},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current sessions, in connect order
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionListDto>, StatusCode> {
    let sessions = state.relay.snapshot().await.map_err(|e| {
        tracing::error!("Failed to read sessions: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok(Json(SessionListDto {
        count: sessions.len(),
        sessions: sessions.iter().map(SessionInfo::from).collect(),
    }))
}
