//! Connection registry: the roster of logged-in participants.
//!
//! The registry is a plain owned value. The relay actor is its only owner, so
//! it needs no locking of its own.

use super::{
    entity::Participant,
    value_object::{ConnectionId, Nickname},
};

/// Insertion-ordered roster plus the game flag.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    participants: Vec<Participant>,
    in_progress: bool,
}

impl Registry {
    /// Create an empty registry with no game in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new participant with zero points.
    ///
    /// Nicknames are not checked for duplicates. Callers are expected to add a
    /// given connection at most once (the relay only does so on the
    /// Anonymous → Identified transition).
    pub fn add(&mut self, connection_id: ConnectionId, nickname: Nickname) -> Participant {
        let participant = Participant::new(connection_id, nickname);
        self.participants.push(participant.clone());
        participant
    }

    /// Remove the participant for `connection_id`.
    ///
    /// Returns the removed participant, or `None` if the connection was not on
    /// the roster. Removing an absent id leaves the registry untouched.
    pub fn remove(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.connection_id == connection_id)?;
        Some(self.participants.remove(index))
    }

    /// Current roster in join order.
    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.clone()
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.participants
            .iter()
            .any(|p| &p.connection_id == connection_id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Whether a game round has been started.
    ///
    /// Nothing starts a round yet, so this stays `false` for the life of the
    /// process.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }
}
