//! Scribble relay server library.
//!
//! Relays chat and drawing events between browser clients over WebSocket and
//! keeps the in-memory roster of who is logged in.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
