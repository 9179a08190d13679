//! UseCase layer: the relay rules and the actor that applies them.

pub mod actor;
pub mod error;
pub mod relay;

pub use actor::{RelayActor, RelayCommand, RelayHandle, RosterView};
pub use error::RelayError;
pub use relay::{disconnect, dispatch};
