//! Domain error types.

use thiserror::Error;

/// Errors raised while pushing an event to connected clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessagePushError {
    /// No outbound channel is registered for the connection
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    /// The connection's outbound channel is closed
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// The event could not be encoded for the wire
    #[error("Failed to encode event: {0}")]
    Encode(String),
}
