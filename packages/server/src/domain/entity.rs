//! Domain entities.

use super::value_object::{ConnectionId, Nickname};

/// A logged-in connection as it appears on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub connection_id: ConnectionId,
    pub nickname: Nickname,
    /// Score shown next to the nickname. Starts at 0 and nothing increments it yet.
    pub points: u32,
}

impl Participant {
    pub fn new(connection_id: ConnectionId, nickname: Nickname) -> Self {
        Self {
            connection_id,
            nickname,
            points: 0,
        }
    }
}

/// Per-connection login state.
///
/// A connection starts `Anonymous` and becomes `Identified` on its first
/// login. The transition is one-way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Anonymous,
    Identified {
        nickname: Nickname,
    },
}

impl ConnectionState {
    pub fn nickname(&self) -> Option<&Nickname> {
        match self {
            ConnectionState::Anonymous => None,
            ConnectionState::Identified { nickname } => Some(nickname),
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, ConnectionState::Identified { .. })
    }
}
