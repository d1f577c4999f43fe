//! WebSocket message DTOs for the location relay.
//!
//! Every frame is a JSON object tagged by a kebab-case `type` field.

use serde::{Deserialize, Serialize};

use geo_relay_shared::time::timestamp_to_rfc3339;

use crate::{
    domain::{Coordinates, RelayEvent, Session},
    infrastructure::error::PayloadError,
};

/// Message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    SessionAssigned,
    ConnectedUsers,
    LocationUpdate,
    UserDisconnected,
    SendLocation,
}

/// Session information as sent in snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// RFC 3339, UTC
    pub connected_at: String,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.as_str().to_string(),
            latitude: session.coordinates.latitude,
            longitude: session.coordinates.longitude,
            connected_at: timestamp_to_rfc3339(session.connected_at.value()),
        }
    }
}

/// Tells a newly connected client its own id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAssignedMessage {
    pub r#type: MessageType,
    pub id: String,
}

/// Catch-up snapshot sent when a client connects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedUsersMessage {
    pub r#type: MessageType,
    pub users: Vec<SessionInfo>,
}

/// Location broadcast, sender included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdateMessage {
    pub r#type: MessageType,
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// RFC 3339, UTC, captured at broadcast time
    pub timestamp: String,
}

/// Departure notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDisconnectedMessage {
    pub r#type: MessageType,
    pub id: String,
}

/// Location report sent by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendLocationMessage {
    pub r#type: MessageType,
    pub latitude: f64,
    pub longitude: f64,
}

impl SendLocationMessage {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            r#type: MessageType::SendLocation,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Any frame the server may send
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    SessionAssigned(SessionAssignedMessage),
    ConnectedUsers(ConnectedUsersMessage),
    LocationUpdate(LocationUpdateMessage),
    UserDisconnected(UserDisconnectedMessage),
}

#[derive(Deserialize)]
struct Envelope {
    r#type: MessageType,
}

impl From<&RelayEvent> for ServerMessage {
    fn from(event: &RelayEvent) -> Self {
        match event {
            RelayEvent::SessionAssigned { id } => Self::SessionAssigned(SessionAssignedMessage {
                r#type: MessageType::SessionAssigned,
                id: id.as_str().to_string(),
            }),
            RelayEvent::ConnectedUsers { sessions } => {
                Self::ConnectedUsers(ConnectedUsersMessage {
                    r#type: MessageType::ConnectedUsers,
                    users: sessions.iter().map(SessionInfo::from).collect(),
                })
            }
            RelayEvent::LocationUpdate {
                id,
                coordinates,
                timestamp,
            } => Self::LocationUpdate(LocationUpdateMessage {
                r#type: MessageType::LocationUpdate,
                id: id.as_str().to_string(),
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
                timestamp: timestamp_to_rfc3339(timestamp.value()),
            }),
            RelayEvent::UserDisconnected { id } => {
                Self::UserDisconnected(UserDisconnectedMessage {
                    r#type: MessageType::UserDisconnected,
                    id: id.as_str().to_string(),
                })
            }
        }
    }
}

/// Serialize a relay event into a text frame
pub fn encode_event(event: &RelayEvent) -> Result<String, serde_json::Error> {
    match ServerMessage::from(event) {
        ServerMessage::SessionAssigned(msg) => serde_json::to_string(&msg),
        ServerMessage::ConnectedUsers(msg) => serde_json::to_string(&msg),
        ServerMessage::LocationUpdate(msg) => serde_json::to_string(&msg),
        ServerMessage::UserDisconnected(msg) => serde_json::to_string(&msg),
    }
}

/// Decode an inbound `send-location` frame
///
/// # Errors
///
/// Returns `PayloadError::MalformedPayload` when the frame is not JSON, is
/// not a `send-location` event, or lacks numeric `latitude`/`longitude`.
pub fn decode_send_location(text: &str) -> Result<Coordinates, PayloadError> {
    let envelope: Envelope = serde_json::from_str(text)
        .map_err(|e| PayloadError::MalformedPayload(e.to_string()))?;
    if envelope.r#type != MessageType::SendLocation {
        return Err(PayloadError::MalformedPayload(format!(
            "unexpected event type: {:?}",
            envelope.r#type
        )));
    }

    let msg: SendLocationMessage = serde_json::from_str(text)
        .map_err(|e| PayloadError::MalformedPayload(e.to_string()))?;
    Ok(Coordinates::new(msg.latitude, msg.longitude))
}

/// Decode a frame sent by the server
pub fn decode_server_message(text: &str) -> Result<ServerMessage, PayloadError> {
    let malformed = |e: serde_json::Error| PayloadError::MalformedPayload(e.to_string());

    let envelope: Envelope = serde_json::from_str(text).map_err(malformed)?;
    let msg = match envelope.r#type {
        MessageType::SessionAssigned => {
            ServerMessage::SessionAssigned(serde_json::from_str(text).map_err(malformed)?)
        }
        MessageType::ConnectedUsers => {
            ServerMessage::ConnectedUsers(serde_json::from_str(text).map_err(malformed)?)
        }
        MessageType::LocationUpdate => {
            ServerMessage::LocationUpdate(serde_json::from_str(text).map_err(malformed)?)
        }
        MessageType::UserDisconnected => {
            ServerMessage::UserDisconnected(serde_json::from_str(text).map_err(malformed)?)
        }
        MessageType::SendLocation => {
            return Err(PayloadError::MalformedPayload(
                "send-location is a client event".to_string(),
            ));
        }
    };
    Ok(msg)
}
