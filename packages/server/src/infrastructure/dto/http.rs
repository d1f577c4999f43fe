//! HTTP API response DTOs for the location relay.

use serde::{Deserialize, Serialize};

use super::websocket::SessionInfo;

/// Current session snapshot for the sessions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListDto {
    pub count: usize,
    pub sessions: Vec<SessionInfo>,
}
