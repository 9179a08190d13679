//! Utilities shared by the Scribble server and client.

pub mod logger;
pub mod time;
