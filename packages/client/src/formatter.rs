//! Message formatting utilities for client display.

use scribble_server::infrastructure::dto::websocket::{ParticipantInfo, ServerFrame};
use scribble_shared::time::millis_to_local_clock;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any frame received from the relay.
    ///
    /// Cursor moves and stroke segments arrive once per mouse movement in the
    /// browser, so they are not printed.
    ///
    /// # Arguments
    ///
    /// * `frame` - The decoded frame
    /// * `me` - The nickname of this client (marked as "me" in rosters)
    /// * `received_at` - Unix timestamp of arrival (milliseconds)
    pub fn format_frame(frame: &ServerFrame, me: &str, received_at: i64) -> Option<String> {
        match frame {
            ServerFrame::NewUser { nickname } => Some(Self::format_new_user(nickname)),
            ServerFrame::Disconnected { nickname } => Some(Self::format_disconnected(nickname)),
            ServerFrame::ReceiveMessage { message, nickname } => {
                Some(Self::format_chat_message(nickname, message, received_at))
            }
            ServerFrame::Filled { color } => Some(Self::format_filled(color)),
            ServerFrame::Pong { sockets } => Some(Self::format_roster(sockets, me)),
            ServerFrame::Moved { .. } | ServerFrame::Painted { .. } => None,
        }
    }

    /// Format a join notification
    pub fn format_new_user(nickname: &str) -> String {
        format!("\n+ {} just joined!\n", nickname)
    }

    /// Format a leave notification
    pub fn format_disconnected(nickname: &str) -> String {
        format!("\n- {} just left!\n", nickname)
    }

    /// Format a chat message from someone else
    pub fn format_chat_message(nickname: &str, message: &str, received_at: i64) -> String {
        format!(
            "\n[{}] {}: {}\n",
            millis_to_local_clock(received_at),
            nickname,
            message
        )
    }

    /// Format a canvas fill
    pub fn format_filled(color: &str) -> String {
        format!("\n* canvas filled with {}\n", color)
    }

    /// Format the roster with nickname and points
    ///
    /// Entries whose nickname equals `me` are marked; nicknames are not unique,
    /// so more than one entry can carry the mark.
    pub fn format_roster(participants: &[ParticipantInfo], me: &str) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str("Players:\n");

        if participants.is_empty() {
            output.push_str("(No players)\n");
        } else {
            for participant in participants {
                let me_suffix = if participant.nickname == me { " (me)" } else { "" };
                output.push_str(&format!(
                    "{}{}: {}\n",
                    participant.nickname, me_suffix, participant.points
                ));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a frame that could not be decoded
    pub fn format_raw_message(text: &str) -> String {
        format!("\n? {}\n", text)
    }
}
