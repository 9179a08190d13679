//! Terminal client for the Scribble relay.
//!
//! Joins the shared chat from a terminal: logs in with a nickname, sends chat
//! lines and fills, and prints what everybody else does.

mod domain;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use error::ClientError;
pub use runner::run_client;
