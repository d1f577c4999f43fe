//! Infrastructure layer error definitions.

use thiserror::Error;

/// Errors raised while decoding an inbound frame
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Not JSON, unknown event type, or missing/mistyped coordinates
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Errors raised while handing a frame to a connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The connection's outbound queue is gone
    #[error("Connection closed")]
    Closed,
}
