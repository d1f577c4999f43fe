//! Core domain models for the location relay.

use super::value_object::{Coordinates, SessionId, Timestamp};

/// Represents one live connection and its last known location
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Session identifier assigned at connect time
    pub id: SessionId,
    /// Last reported location (sentinel until the first report)
    pub coordinates: Coordinates,
    /// Timestamp when the connection was established
    pub connected_at: Timestamp,
}

impl Session {
    /// Create a new session with sentinel coordinates
    pub fn new(id: SessionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            coordinates: Coordinates::SENTINEL,
            connected_at,
        }
    }

    /// Replace the last known location
    pub fn relocate(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }
}
