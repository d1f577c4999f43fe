//! Outbound relay events and their addressing.
//!
//! A use case answers every inbound transition with a list of
//! [`Delivery`] values: "send event E to recipient set R". The transport
//! decides how each recipient is reached.

use super::{
    entity::Session,
    value_object::{Coordinates, SessionId, Timestamp},
};

/// Event emitted by the relay
#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    /// Tells a new connection which id it was assigned
    SessionAssigned { id: SessionId },
    /// Catch-up snapshot of every live session
    ConnectedUsers { sessions: Vec<Session> },
    /// A session reported a new location
    LocationUpdate {
        id: SessionId,
        coordinates: Coordinates,
        timestamp: Timestamp,
    },
    /// A session left
    UserDisconnected { id: SessionId },
}

impl RelayEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::SessionAssigned { .. } => "session-assigned",
            Self::ConnectedUsers { .. } => "connected-users",
            Self::LocationUpdate { .. } => "location-update",
            Self::UserDisconnected { .. } => "user-disconnected",
        }
    }
}

/// Who receives a delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// A single connection
    Only(SessionId),
    /// Every connection open at dispatch time
    All,
}

/// An event addressed to a set of recipients
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub recipients: Recipients,
    pub event: RelayEvent,
}

impl Delivery {
    pub fn to(id: SessionId, event: RelayEvent) -> Self {
        Self {
            recipients: Recipients::Only(id),
            event,
        }
    }

    pub fn to_all(event: RelayEvent) -> Self {
        Self {
            recipients: Recipients::All,
            event,
        }
    }
}
