//! Domain layer: participants, the connection registry, relay events and the
//! outbound delivery seam.

pub mod entity;
pub mod error;
pub mod event;
pub mod pusher;
pub mod registry;
pub mod value_object;

pub use entity::{ConnectionState, Participant};
pub use error::MessagePushError;
pub use event::{ClientEvent, Delivery, Outbound, ServerEvent};
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::Registry;
pub use value_object::{CanvasPoint, Color, ConnectionId, Nickname};

#[cfg(test)]
pub use pusher::MockMessagePusher;
