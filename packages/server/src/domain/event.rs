//! Relay events and their delivery targets.

use super::{
    entity::Participant,
    value_object::{CanvasPoint, Color, ConnectionId, Nickname},
};

/// Event received from a browser client.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Claim a nickname. Only honoured once per connection.
    Login { nickname: Nickname },
    /// Chat line for everyone else.
    SendMessage { message: String },
    /// Pointer moved without drawing (cursor preview).
    Moving(CanvasPoint),
    /// Pointer moved while drawing (stroke segment).
    Painting(CanvasPoint),
    /// Whole canvas filled with one colour.
    Filling { color: Color },
    /// Request for a fresh roster.
    PresencePing,
}

impl ClientEvent {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientEvent::Login { .. } => "login",
            ClientEvent::SendMessage { .. } => "sendMessage",
            ClientEvent::Moving(_) => "moving",
            ClientEvent::Painting(_) => "painting",
            ClientEvent::Filling { .. } => "filling",
            ClientEvent::PresencePing => "presencePing",
        }
    }
}

/// Event sent to browser clients.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    NewUser { nickname: Nickname },
    ReceiveMessage { message: String, nickname: Nickname },
    Disconnected { nickname: Nickname },
    Moved(CanvasPoint),
    Painted(CanvasPoint),
    Filled { color: Color },
    /// Roster snapshot.
    Pong { sockets: Vec<Participant> },
}

/// Who receives an outbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Every live connection except the given one.
    BroadcastExcept(ConnectionId),
    /// Only the given connection.
    Unicast(ConnectionId),
}

/// An event paired with its delivery target.
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub delivery: Delivery,
    pub event: ServerEvent,
}

impl Outbound {
    pub fn broadcast_except(origin: ConnectionId, event: ServerEvent) -> Self {
        Self {
            delivery: Delivery::BroadcastExcept(origin),
            event,
        }
    }

    pub fn unicast(target: ConnectionId, event: ServerEvent) -> Self {
        Self {
            delivery: Delivery::Unicast(target),
            event,
        }
    }
}
