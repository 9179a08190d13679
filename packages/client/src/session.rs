//! WebSocket client session management.

use futures_util::{Sink, SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use scribble_server::infrastructure::dto::websocket::{ClientFrame, ServerFrame};
use scribble_shared::time::now_millis;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::error::ClientError;

use super::{
    domain::{HELP, InputCommand, handshake_frames, parse_input},
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Start the line editor on a blocking thread.
///
/// Lines typed by the user arrive on the returned channel. The channel closes
/// when the user presses Ctrl+C or Ctrl+D.
pub fn spawn_line_reader(nickname: &str) -> Result<mpsc::UnboundedReceiver<String>, ClientError> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();
    let (ready_tx, ready_rx) = std::sync::mpsc::sync_channel::<Result<(), String>>(1);
    let prompt = format!("{}> ", nickname);

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => {
                let _ = ready_tx.send(Ok(()));
                rl
            }
            Err(e) => {
                let _ = ready_tx.send(Err(e.to_string()));
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                    }
                    if input_tx.send(line.to_string()).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(input_rx),
        Ok(Err(e)) => Err(ClientError::Readline(e)),
        Err(e) => Err(ClientError::Readline(e.to_string())),
    }
}

async fn send_frame<S>(write: &mut S, frame: &ClientFrame) -> Result<(), ClientError>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let json = match serde_json::to_string(frame) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize frame: {}", e);
            return Ok(());
        }
    };

    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionLost(e.to_string()))
}

/// Run one WebSocket session.
///
/// Logs in, asks for the roster, then relays typed lines until the user quits
/// (`Ok`) or the connection drops (`Err`).
pub async fn run_client_session(
    url: &str,
    nickname: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to {}", url);
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.\n",
        nickname
    );

    let (mut write, mut read) = ws_stream.split();

    for frame in handshake_frames(nickname) {
        send_frame(&mut write, &frame).await?;
    }

    // Spawn a task to print incoming frames
    let me = nickname.to_string();
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let output = match serde_json::from_str::<ServerFrame>(text.as_str()) {
                        Ok(frame) => MessageFormatter::format_frame(&frame, &me, now_millis()),
                        Err(_) => Some(MessageFormatter::format_raw_message(text.as_str())),
                    };
                    if let Some(output) = output {
                        print!("{}", output);
                        redisplay_prompt(&me);
                    }
                }
                Ok(Message::Close(_)) => {
                    return Err(ClientError::ConnectionLost(
                        "server closed the connection".to_string(),
                    ));
                }
                Ok(_) => {}
                Err(e) => return Err(ClientError::ConnectionLost(e.to_string())),
            }
        }
        Err(ClientError::ConnectionLost("stream ended".to_string()))
    });

    loop {
        tokio::select! {
            result = &mut read_task => {
                return match result {
                    Ok(result) => result,
                    Err(e) => Err(ClientError::ConnectionLost(e.to_string())),
                };
            }
            line = input_rx.recv() => {
                let Some(line) = line else {
                    // The line editor has stopped: leave quietly
                    read_task.abort();
                    let _ = write.send(Message::Close(None)).await;
                    return Ok(());
                };

                match parse_input(&line) {
                    Some(InputCommand::Send(frame)) => {
                        if let Err(e) = send_frame(&mut write, &frame).await {
                            read_task.abort();
                            return Err(e);
                        }
                    }
                    Some(InputCommand::Quit) => {
                        read_task.abort();
                        let _ = write.send(Message::Close(None)).await;
                        return Ok(());
                    }
                    Some(InputCommand::Help) => print!("{}", HELP),
                    None if line.trim().is_empty() => {}
                    None => print!("{}", HELP),
                }
            }
        }
    }
}
