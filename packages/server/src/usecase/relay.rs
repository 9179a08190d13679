//! Event relay: maps one inbound event to the registry change and the
//! outbound events it causes.
//!
//! Both entry points are pure functions of the registry, the sender's
//! connection state and the event. They never touch the network; the relay
//! actor delivers whatever they return.

use crate::domain::{
    ClientEvent, ConnectionId, ConnectionState, Nickname, Outbound, Registry, ServerEvent,
};

/// Handle one inbound event from `origin`.
///
/// Login is only accepted from an anonymous connection, and everything except
/// the presence ping requires an identified one. Events that arrive in the
/// wrong state are dropped and produce no outbound messages.
pub fn dispatch(
    registry: &mut Registry,
    state: &mut ConnectionState,
    origin: ConnectionId,
    event: ClientEvent,
) -> Vec<Outbound> {
    let kind = event.kind();
    match event {
        ClientEvent::PresencePing => vec![Outbound::unicast(origin, roster(registry))],
        ClientEvent::Login { nickname } => login(registry, state, origin, nickname),
        ClientEvent::SendMessage { message } => {
            relay_from_identified(state, origin, kind, |nickname| ServerEvent::ReceiveMessage {
                message,
                nickname: nickname.clone(),
            })
        }
        ClientEvent::Moving(point) => {
            relay_from_identified(state, origin, kind, |_| ServerEvent::Moved(point))
        }
        ClientEvent::Painting(point) => {
            relay_from_identified(state, origin, kind, |_| ServerEvent::Painted(point))
        }
        ClientEvent::Filling { color } => {
            relay_from_identified(state, origin, kind, |_| ServerEvent::Filled { color })
        }
    }
}

fn login(
    registry: &mut Registry,
    state: &mut ConnectionState,
    origin: ConnectionId,
    nickname: Nickname,
) -> Vec<Outbound> {
    if let ConnectionState::Identified { nickname: current } = state {
        tracing::warn!(
            "Connection {} is already logged in as '{}', ignoring login as '{}'",
            origin,
            current,
            nickname
        );
        return Vec::new();
    }

    registry.add(origin, nickname.clone());
    *state = ConnectionState::Identified {
        nickname: nickname.clone(),
    };
    tracing::info!("'{}' logged in on connection {}", nickname, origin);

    if registry.len() > 1 && !registry.in_progress() {
        tracing::info!(
            "{} participants online, enough to start a game",
            registry.len()
        );
    }

    vec![
        Outbound::broadcast_except(origin, ServerEvent::NewUser { nickname }),
        Outbound::broadcast_except(origin, roster(registry)),
    ]
}

/// Broadcast the event built by `relayed` to everyone but `origin`, provided
/// the connection has logged in.
fn relay_from_identified(
    state: &ConnectionState,
    origin: ConnectionId,
    kind: &str,
    relayed: impl FnOnce(&Nickname) -> ServerEvent,
) -> Vec<Outbound> {
    match state.nickname() {
        Some(nickname) => vec![Outbound::broadcast_except(origin, relayed(nickname))],
        None => {
            tracing::warn!("Dropping '{}' from connection {} before login", kind, origin);
            Vec::new()
        }
    }
}

/// Handle the transport-level disconnect of `origin`.
///
/// An identified connection is removed from the roster and the others are
/// told who left, followed by the updated roster. An anonymous connection
/// was never on the roster, so nothing is announced.
pub fn disconnect(
    registry: &mut Registry,
    state: &ConnectionState,
    origin: ConnectionId,
) -> Vec<Outbound> {
    registry.remove(&origin);

    match state {
        ConnectionState::Identified { nickname } => {
            tracing::info!("'{}' left (connection {})", nickname, origin);
            vec![
                Outbound::broadcast_except(
                    origin,
                    ServerEvent::Disconnected {
                        nickname: nickname.clone(),
                    },
                ),
                Outbound::broadcast_except(origin, roster(registry)),
            ]
        }
        ConnectionState::Anonymous => {
            tracing::debug!("Anonymous connection {} closed", origin);
            Vec::new()
        }
    }
}

fn roster(registry: &Registry) -> ServerEvent {
    ServerEvent::Pong {
        sockets: registry.snapshot(),
    }
}
