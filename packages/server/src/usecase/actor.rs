//! Relay actor.
//!
//! One task owns the registry and every connection's login state. WebSocket
//! tasks send it `RelayCommand`s through a `RelayHandle`, and it applies them
//! strictly one after another: the registry change and the resulting
//! deliveries of one event complete before the next event is looked at.

use std::{collections::HashMap, sync::Arc};

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::domain::{
    ClientEvent, ConnectionId, ConnectionState, Delivery, MessagePusher, Outbound, Participant,
    PusherChannel, Registry,
};

use super::{error::RelayError, relay};

/// Commands accepted by the relay actor.
#[derive(Debug)]
pub enum RelayCommand {
    /// A WebSocket was upgraded; frames for it go to `channel`.
    Connect {
        connection_id: ConnectionId,
        channel: PusherChannel,
    },
    /// A decoded event arrived on `connection_id`.
    Event {
        connection_id: ConnectionId,
        event: ClientEvent,
    },
    /// The transport for `connection_id` is gone.
    Disconnect { connection_id: ConnectionId },
    /// Read-only view of the roster.
    Roster { reply: oneshot::Sender<RosterView> },
}

/// Roster snapshot handed out to observers outside the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    pub in_progress: bool,
    pub participants: Vec<Participant>,
}

/// Cloneable sender side of the relay actor.
#[derive(Debug, Clone)]
pub struct RelayHandle {
    commands: mpsc::UnboundedSender<RelayCommand>,
}

impl RelayHandle {
    pub fn connect(
        &self,
        connection_id: ConnectionId,
        channel: PusherChannel,
    ) -> Result<(), RelayError> {
        self.send(RelayCommand::Connect {
            connection_id,
            channel,
        })
    }

    pub fn send_event(
        &self,
        connection_id: ConnectionId,
        event: ClientEvent,
    ) -> Result<(), RelayError> {
        self.send(RelayCommand::Event {
            connection_id,
            event,
        })
    }

    pub fn disconnect(&self, connection_id: ConnectionId) -> Result<(), RelayError> {
        self.send(RelayCommand::Disconnect { connection_id })
    }

    /// Ask the actor for the current roster.
    ///
    /// The reply reflects every command sent through any handle before this call.
    pub async fn roster(&self) -> Result<RosterView, RelayError> {
        let (reply, response) = oneshot::channel();
        self.send(RelayCommand::Roster { reply })?;
        response.await.map_err(|_| RelayError::ActorStopped)
    }

    fn send(&self, command: RelayCommand) -> Result<(), RelayError> {
        self.commands
            .send(command)
            .map_err(|_| RelayError::ActorStopped)
    }
}

/// Owner of the registry and the per-connection login state.
pub struct RelayActor {
    registry: Registry,
    connections: HashMap<ConnectionId, ConnectionState>,
    message_pusher: Arc<dyn MessagePusher>,
    commands: mpsc::UnboundedReceiver<RelayCommand>,
}

impl RelayActor {
    /// Create an actor with an empty registry, plus the handle that feeds it.
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> (Self, RelayHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let actor = Self {
            registry: Registry::new(),
            connections: HashMap::new(),
            message_pusher,
            commands: rx,
        };
        (actor, RelayHandle { commands: tx })
    }

    /// Create an actor and run it on a new tokio task.
    ///
    /// The task ends, dropping the registry, once every `RelayHandle` is gone.
    pub fn spawn(message_pusher: Arc<dyn MessagePusher>) -> (RelayHandle, JoinHandle<()>) {
        let (actor, handle) = Self::new(message_pusher);
        (handle, tokio::spawn(actor.run()))
    }

    pub async fn run(mut self) {
        tracing::debug!("Relay actor started");
        while let Some(command) = self.commands.recv().await {
            self.handle(command).await;
        }
        tracing::info!(
            "Relay actor stopped with {} participant(s) still registered",
            self.registry.len()
        );
    }

    pub async fn handle(&mut self, command: RelayCommand) {
        match command {
            RelayCommand::Connect {
                connection_id,
                channel,
            } => {
                self.connections
                    .insert(connection_id, ConnectionState::Anonymous);
                self.message_pusher
                    .register_client(connection_id, channel)
                    .await;
                tracing::info!(
                    "Connection {} opened ({} live)",
                    connection_id,
                    self.connections.len()
                );
            }
            RelayCommand::Event {
                connection_id,
                event,
            } => {
                let Some(state) = self.connections.get_mut(&connection_id) else {
                    tracing::warn!(
                        "Dropping '{}' from unknown connection {}",
                        event.kind(),
                        connection_id
                    );
                    return;
                };
                tracing::debug!("'{}' from connection {}", event.kind(), connection_id);
                let outbound = relay::dispatch(&mut self.registry, state, connection_id, event);
                self.deliver(outbound).await;
            }
            RelayCommand::Disconnect { connection_id } => {
                let Some(state) = self.connections.remove(&connection_id) else {
                    tracing::debug!("Connection {} already closed", connection_id);
                    return;
                };
                self.message_pusher.unregister_client(&connection_id).await;
                let outbound = relay::disconnect(&mut self.registry, &state, connection_id);
                self.deliver(outbound).await;
                tracing::info!(
                    "Connection {} closed ({} live)",
                    connection_id,
                    self.connections.len()
                );
            }
            RelayCommand::Roster { reply } => {
                let view = RosterView {
                    in_progress: self.registry.in_progress(),
                    participants: self.registry.snapshot(),
                };
                if reply.send(view).is_err() {
                    tracing::debug!("Roster requester went away before the reply");
                }
            }
        }
    }

    async fn deliver(&self, outbound: Vec<Outbound>) {
        for Outbound { delivery, event } in outbound {
            let result = match delivery {
                Delivery::Unicast(target) => self.message_pusher.push_to(&target, &event).await,
                Delivery::BroadcastExcept(origin) => {
                    let targets: Vec<ConnectionId> = self
                        .connections
                        .keys()
                        .filter(|id| **id != origin)
                        .copied()
                        .collect();
                    if targets.is_empty() {
                        continue;
                    }
                    self.message_pusher.broadcast(targets, &event).await
                }
            };
            if let Err(e) = result {
                tracing::warn!("Failed to deliver event: {}", e);
            }
        }
    }
}
