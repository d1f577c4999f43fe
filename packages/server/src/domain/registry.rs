//! Session registry: the authoritative set of live sessions.
//!
//! Lookup, insertion and removal by id are O(1). Each entry carries an
//! insertion sequence number so that snapshots come back in connect order.

use std::collections::HashMap;

use super::{
    entity::Session,
    error::RegistryError,
    value_object::{Coordinates, SessionId, Timestamp},
};

struct Entry {
    seq: u64,
    session: Session,
}

/// In-memory registry of live sessions
///
/// Owned by exactly one relay task; it is never shared behind a lock.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Entry>,
    next_seq: u64,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session connected now
    pub fn register(&mut self, id: SessionId) -> Session {
        self.register_at(id, Timestamp::now())
    }

    /// Register a session with an explicit connect time
    ///
    /// An entry already stored under `id` is stale (its disconnect was not
    /// observed yet) and is overwritten. The fresh session moves to the end
    /// of the snapshot order.
    pub fn register_at(&mut self, id: SessionId, connected_at: Timestamp) -> Session {
        let session = Session::new(id.clone(), connected_at);
        let seq = self.next_seq;
        self.next_seq += 1;

        let previous = self.sessions.insert(
            id,
            Entry {
                seq,
                session: session.clone(),
            },
        );
        if let Some(stale) = previous {
            tracing::warn!(
                "Session '{}' was already registered; overwriting stale entry",
                stale.session.id
            );
        }

        session
    }

    /// Update the location of a registered session in place
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownSession` if `id` is not registered.
    /// Nothing is created in that case.
    pub fn update_location(
        &mut self,
        id: &SessionId,
        coordinates: Coordinates,
    ) -> Result<Session, RegistryError> {
        let entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownSession(id.clone()))?;
        entry.session.relocate(coordinates);
        Ok(entry.session.clone())
    }

    /// Remove a session and return it
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownSession` if `id` is not registered
    /// (e.g. a duplicate disconnect notification).
    pub fn remove(&mut self, id: &SessionId) -> Result<Session, RegistryError> {
        self.sessions
            .remove(id)
            .map(|entry| entry.session)
            .ok_or_else(|| RegistryError::UnknownSession(id.clone()))
    }

    /// Copy all sessions in insertion order
    ///
    /// The returned vector owns its sessions; later registry mutations do
    /// not affect it.
    pub fn snapshot_all(&self) -> Vec<Session> {
        let mut entries: Vec<&Entry> = self.sessions.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries
            .into_iter()
            .map(|entry| entry.session.clone())
            .collect()
    }

    /// Get a copy of a single session
    #[cfg(test)]
    pub fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.get(id).map(|entry| entry.session.clone())
    }

    #[cfg(test)]
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
