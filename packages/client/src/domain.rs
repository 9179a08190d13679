//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use scribble_server::infrastructure::dto::websocket::ClientFrame;

use crate::error::ClientError;

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    /// Send a frame to the relay
    Send(ClientFrame),
    /// Leave the chat
    Quit,
    /// Show the command list
    Help,
}

/// Help text printed for `/help` and for malformed commands.
pub const HELP: &str = "\
Commands:
  /who           show who is online
  /fill <color>  fill everyone's canvas with a CSS colour
  /quit          leave the chat
  /help          show this help
Anything else is sent as a chat message.
";

/// Parse one line typed by the user.
///
/// Returns `None` for blank lines and for `/fill` without a colour.
pub fn parse_input(line: &str) -> Option<InputCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command {
        "/who" => Some(InputCommand::Send(ClientFrame::Ping)),
        "/quit" => Some(InputCommand::Quit),
        "/help" => Some(InputCommand::Help),
        "/fill" if argument.is_empty() => None,
        "/fill" => Some(InputCommand::Send(ClientFrame::Filling {
            color: argument.to_string(),
        })),
        _ => Some(InputCommand::Send(ClientFrame::SendMessage {
            message: line.to_string(),
        })),
    }
}

/// Frames sent right after the socket opens: log in, then ask for the roster.
pub fn handshake_frames(nickname: &str) -> [ClientFrame; 2] {
    [
        ClientFrame::Login {
            nickname: nickname.to_string(),
        },
        ClientFrame::Ping,
    ]
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
///
/// # Returns
///
/// `true` if reconnection should be attempted, `false` otherwise
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    // A broken terminal will not fix itself by reconnecting
    if matches!(error, ClientError::Readline(_)) {
        return false;
    }

    current_attempt < max_attempts
}
