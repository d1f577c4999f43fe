//! Relay event loop.
//!
//! A single task owns the [`SessionRegistry`] and the
//! [`BroadcastDispatcher`] and processes one [`RelayCommand`] at a time, so
//! registry invariants hold between any two events without locking.
//! Connection tasks talk to it through a cloneable [`RelayHandle`].
//!
//! | command    | registry operation | dispatcher operation                 |
//! |------------|--------------------|--------------------------------------|
//! | `Open`     | `register`         | `session-assigned`, `connected-users` to the new connection |
//! | `Location` | `update_location`  | `location-update` to everyone        |
//! | `Close`    | `remove`           | `user-disconnected` to everyone left |

use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::{
    domain::{Coordinates, Delivery, Session, SessionId, SessionRegistry},
    infrastructure::{BroadcastDispatcher, ConnectionHandle},
    usecase::{ConnectSessionUseCase, DisconnectSessionUseCase, UpdateLocationUseCase},
};

/// Inbound transition for the relay
pub enum RelayCommand {
    /// A connection was established
    Open {
        id: SessionId,
        handle: Box<dyn ConnectionHandle>,
    },
    /// A connection reported its location
    Location {
        id: SessionId,
        coordinates: Coordinates,
    },
    /// A connection closed (normal close, error or idle timeout)
    Close { id: SessionId },
    /// Read-only copy of the current sessions
    Snapshot { reply: oneshot::Sender<Vec<Session>> },
}

/// The relay task has stopped and no longer accepts commands
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Relay is not running")]
pub struct RelayStopped;

/// Registry plus connection handles, driven one command at a time
#[derive(Default)]
pub struct Relay {
    registry: SessionRegistry,
    dispatcher: BroadcastDispatcher,
}

impl Relay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command: registry operation first, then deliveries
    pub fn handle(&mut self, command: RelayCommand) {
        match command {
            RelayCommand::Open { id, handle } => {
                if self.dispatcher.attach(id.clone(), handle) {
                    tracing::warn!("Replaced stale connection handle for '{}'", id);
                }
                let deliveries = ConnectSessionUseCase::new(&mut self.registry).execute(id.clone());
                tracing::info!(
                    "Session '{}' registered ({} online)",
                    id,
                    self.registry.len()
                );
                self.deliver(&deliveries);
            }
            RelayCommand::Location { id, coordinates } => {
                match UpdateLocationUseCase::new(&mut self.registry).execute(id.clone(), coordinates)
                {
                    Ok(deliveries) => {
                        tracing::debug!("Location from '{}': {}", id, coordinates);
                        self.deliver(&deliveries);
                    }
                    Err(e) => tracing::warn!("Dropping location update: {}", e),
                }
            }
            RelayCommand::Close { id } => {
                let result = DisconnectSessionUseCase::new(&mut self.registry).execute(id.clone());
                // the handle goes before the broadcast so the leaver is not a recipient
                self.dispatcher.detach(&id);
                match result {
                    Ok(deliveries) => {
                        tracing::info!(
                            "Session '{}' removed ({} online)",
                            id,
                            self.registry.len()
                        );
                        self.deliver(&deliveries);
                    }
                    Err(e) => tracing::warn!("Ignoring disconnect: {}", e),
                }
            }
            RelayCommand::Snapshot { reply } => {
                // the requester may have gone away; nothing to do then
                let _ = reply.send(self.registry.snapshot_all());
            }
        }
    }

    fn deliver(&self, deliveries: &[Delivery]) {
        for delivery in deliveries {
            self.dispatcher.dispatch(delivery);
        }
    }

    /// Process commands until every [`RelayHandle`] has been dropped
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<RelayCommand>) {
        while let Some(command) = commands.recv().await {
            self.handle(command);
        }
        tracing::info!(
            "Relay stopped ({} sessions, {} connections dropped)",
            self.registry.len(),
            self.dispatcher.connection_count()
        );
    }
}

/// Cloneable sender side of the relay
#[derive(Clone)]
pub struct RelayHandle {
    commands: mpsc::UnboundedSender<RelayCommand>,
}

impl RelayHandle {
    /// Spawn a relay task with an empty registry
    pub fn spawn() -> (Self, JoinHandle<()>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(Relay::new().run(receiver));
        (Self { commands }, task)
    }

    fn submit(&self, command: RelayCommand) -> Result<(), RelayStopped> {
        self.commands.send(command).map_err(|_| RelayStopped)
    }

    pub fn open(
        &self,
        id: SessionId,
        handle: Box<dyn ConnectionHandle>,
    ) -> Result<(), RelayStopped> {
        self.submit(RelayCommand::Open { id, handle })
    }

    pub fn send_location(
        &self,
        id: SessionId,
        coordinates: Coordinates,
    ) -> Result<(), RelayStopped> {
        self.submit(RelayCommand::Location { id, coordinates })
    }

    pub fn close(&self, id: SessionId) -> Result<(), RelayStopped> {
        self.submit(RelayCommand::Close { id })
    }

    /// Current sessions, in connect order
    pub async fn snapshot(&self) -> Result<Vec<Session>, RelayStopped> {
        let (reply, response) = oneshot::channel();
        self.submit(RelayCommand::Snapshot { reply })?;
        response.await.map_err(|_| RelayStopped)
    }
}
