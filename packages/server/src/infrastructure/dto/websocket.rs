//! WebSocket frame DTOs.
//!
//! Every frame is a JSON object tagged by event name, with the payload (if
//! any) under `data`:
//!
//! ```text
//! {"event":"login","data":{"nickname":"Alice"}}
//! {"event":"aPing"}
//! ```

use serde::{Deserialize, Serialize};

/// Frame sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientFrame {
    Login { nickname: String },
    SendMessage { message: String },
    Moving { x: f64, y: f64 },
    Painting { x: f64, y: f64 },
    Filling { color: String },
    #[serde(rename = "aPing", alias = "presencePing")]
    Ping,
}

/// Frame sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerFrame {
    NewUser { nickname: String },
    ReceiveMessage { message: String, nickname: String },
    Disconnected { nickname: String },
    Moved { x: f64, y: f64 },
    Painted { x: f64, y: f64 },
    Filled { color: String },
    #[serde(rename = "aPong")]
    Pong { sockets: Vec<ParticipantInfo> },
}

/// Roster entry as the browser renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    pub id: String,
    pub nickname: String,
    pub points: u32,
}

/// Parse a text frame from a client.
///
/// Returns `None` for anything that is not a known, well-formed event; such
/// frames are dropped by the caller.
pub fn parse_client_frame(text: &str) -> Option<ClientFrame> {
    match serde_json::from_str(text) {
        Ok(frame) => Some(frame),
        Err(e) => {
            tracing::warn!("Dropping malformed frame ({}): {}", e, text);
            None
        }
    }
}
