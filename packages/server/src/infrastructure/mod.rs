//! Infrastructure layer: wire formats and the WebSocket delivery implementation.

pub mod dto;
pub mod message_pusher;
