//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::{http::RosterDto, websocket::ParticipantInfo},
    ui::state::AppState,
};
use scribble_shared::time::{millis_to_rfc3339, now_millis};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current roster, as seen by the relay actor
pub async fn get_roster(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RosterDto>, StatusCode> {
    let view = match state.relay.roster().await {
        Ok(view) => view,
        Err(e) => {
            tracing::error!("Failed to read roster: {}", e);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    // Domain Model から DTO への変換
    let participants: Vec<ParticipantInfo> =
        view.participants.into_iter().map(Into::into).collect();

    Ok(Json(RosterDto {
        in_progress: view.in_progress,
        participant_count: participants.len(),
        participants,
        generated_at: millis_to_rfc3339(now_millis()),
    }))
}
