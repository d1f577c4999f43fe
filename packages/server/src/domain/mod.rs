//! Domain layer for the location relay.
//!
//! This module contains the session state and relay protocol rules,
//! independent of data transfer objects (DTOs) and transport concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod registry;
pub mod value_object;

pub use entity::Session;
pub use error::{RegistryError, ValueObjectError};
pub use event::{Delivery, Recipients, RelayEvent};
pub use factory::SessionIdFactory;
pub use registry::SessionRegistry;
pub use value_object::{Coordinates, SessionId, Timestamp};
