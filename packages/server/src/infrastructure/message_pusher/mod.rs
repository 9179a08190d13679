//! `MessagePusher` implementations.
//!
//! - `websocket`: pushes JSON frames into per-connection WebSocket channels

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
