//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::SessionId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// SessionId validation error
    #[error("SessionId cannot be empty")]
    SessionIdEmpty,
}

/// Errors related to the session registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Update or removal referenced a session that is not registered
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),
}
