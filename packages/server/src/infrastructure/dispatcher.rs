//! Broadcast dispatcher.
//!
//! Holds one outbound handle per open connection and mails each
//! [`Delivery`] to the handles its recipient set names. Every send is
//! independent: a dead recipient is logged and skipped.

use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    domain::{Delivery, Recipients, SessionId},
    infrastructure::{dto::websocket::encode_event, error::ConnectionError},
};

/// Outbound side of one connection
#[cfg_attr(test, mockall::automock)]
pub trait ConnectionHandle: Send {
    /// Queue a text frame without waiting for it to be written
    fn send(&self, payload: String) -> Result<(), ConnectionError>;
}

impl ConnectionHandle for UnboundedSender<String> {
    fn send(&self, payload: String) -> Result<(), ConnectionError> {
        UnboundedSender::send(self, payload).map_err(|_| ConnectionError::Closed)
    }
}

/// Outcome of a single dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failed: usize,
}

/// Maps session ids to connection handles and fans deliveries out
#[derive(Default)]
pub struct BroadcastDispatcher {
    connections: HashMap<SessionId, Box<dyn ConnectionHandle>>,
}

impl BroadcastDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the handle of a newly opened connection
    ///
    /// Returns `true` if a stale handle was replaced.
    pub fn attach(&mut self, id: SessionId, handle: Box<dyn ConnectionHandle>) -> bool {
        self.connections.insert(id, handle).is_some()
    }

    /// Detach a closed connection
    pub fn detach(&mut self, id: &SessionId) -> bool {
        self.connections.remove(id).is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Send a delivery to its recipients
    pub fn dispatch(&self, delivery: &Delivery) -> DispatchReport {
        let mut report = DispatchReport::default();
        let event_name = delivery.event.name();

        let payload = match encode_event(&delivery.event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize {} event: {}", event_name, e);
                return report;
            }
        };

        match &delivery.recipients {
            Recipients::Only(id) => match self.connections.get(id) {
                Some(handle) => Self::send_one(id, handle.as_ref(), payload, &mut report),
                None => {
                    tracing::warn!("No open connection for '{}'; dropping {}", id, event_name);
                    report.failed += 1;
                }
            },
            Recipients::All => {
                for (id, handle) in &self.connections {
                    Self::send_one(id, handle.as_ref(), payload.clone(), &mut report);
                }
            }
        }

        tracing::debug!(
            "Dispatched {} (delivered: {}, failed: {})",
            event_name,
            report.delivered,
            report.failed
        );
        report
    }

    fn send_one(
        id: &SessionId,
        handle: &dyn ConnectionHandle,
        payload: String,
        report: &mut DispatchReport,
    ) {
        match handle.send(payload) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                tracing::warn!("Failed to send to client '{}': {}", id, e);
                report.failed += 1;
            }
        }
    }
}
