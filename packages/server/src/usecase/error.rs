//! UseCase error types.

use thiserror::Error;

/// Errors returned by `RelayHandle`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    /// The relay actor has stopped and no longer accepts commands
    #[error("Relay actor has stopped")]
    ActorStopped,
}
