//! Client error definitions.

use thiserror::Error;

/// Errors that end a client session
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connecting or talking to the relay failed
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// A location report could not be serialized
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors in a line typed at the prompt
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two numbers: <latitude> <longitude>")]
    WrongArity,

    #[error("not a number: {0}")]
    NotANumber(String),
}
