//! UseCase 層のエラー定義

use thiserror::Error;

/// Errors returned by `UpdateLocationUseCase`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateLocationError {
    /// The sender is not registered (its update is dropped)
    #[error("Session '{0}' is not connected")]
    UnknownSession(String),
}

/// Errors returned by `DisconnectSessionUseCase`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisconnectError {
    /// The session was already removed (e.g. duplicate close notification)
    #[error("Session '{0}' is not connected")]
    UnknownSession(String),
}
