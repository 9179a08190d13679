//! UI layer: axum router, WebSocket and HTTP handlers.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;

pub use error::ServerError;
pub use server::Server;
