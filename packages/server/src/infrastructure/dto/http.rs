//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::ParticipantInfo;

/// Response body of `GET /api/roster`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDto {
    pub in_progress: bool,
    pub participant_count: usize,
    pub participants: Vec<ParticipantInfo>,
    /// RFC 3339 time the snapshot was taken
    pub generated_at: String,
}
