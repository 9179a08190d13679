//! Outbound delivery seam.
//!
//! The relay decides *who* gets an event; a `MessagePusher` implementation
//! decides *how* it reaches them (encoding and transport).

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, event::ServerEvent, value_object::ConnectionId};

/// Channel carrying encoded frames to one connection's socket writer.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Delivers server events to live connections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Start delivering to `connection_id` through `channel`.
    async fn register_client(&self, connection_id: ConnectionId, channel: PusherChannel);

    /// Stop delivering to `connection_id`. Unknown ids are ignored.
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Send `event` to a single connection.
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// Send `event` to every connection in `targets`.
    ///
    /// Failures for individual targets are logged and skipped; an error is
    /// returned only when the event cannot be encoded.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;
}
