//! WebSocket location relay server implementation.

mod handler;
pub mod relay;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run, serve};
