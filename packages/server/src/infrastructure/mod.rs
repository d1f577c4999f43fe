//! Infrastructure layer.
//!
//! Wire formats (DTOs) and the connection-handle based broadcast dispatcher.

pub mod dispatcher;
pub mod dto;
pub mod error;

pub use dispatcher::{BroadcastDispatcher, ConnectionHandle, DispatchReport};
pub use error::{ConnectionError, PayloadError};
