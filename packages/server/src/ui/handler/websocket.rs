//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId, infrastructure::dto::websocket::parse_client_frame,
    ui::state::AppState, usecase::RelayHandle,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionId::generate();
    tracing::debug!("Upgrading connection {}", connection_id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that drains the outbound channel into the WebSocket sink.
///
/// The task ends when the channel closes or the socket rejects a write.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that decodes inbound frames and forwards them to the relay.
///
/// Malformed frames are dropped; the loop ends on close, on a transport error
/// or when the relay has stopped.
fn receiver_loop(
    mut receiver: futures_util::stream::SplitStream<WebSocket>,
    relay: RelayHandle,
    connection_id: ConnectionId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on connection {}: {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::trace!("Received text from {}: {}", connection_id, text.as_str());
                    let Some(frame) = parse_client_frame(text.as_str()) else {
                        continue;
                    };
                    if let Err(e) = relay.send_event(connection_id, frame.into()) {
                        tracing::error!("Cannot forward event from {}: {}", connection_id, e);
                        break;
                    }
                }
                Message::Binary(_) => {
                    tracing::debug!("Ignoring binary frame from {}", connection_id);
                }
                Message::Close(_) => {
                    tracing::info!("Connection {} requested close", connection_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (sender, receiver) = socket.split();

    // Outbound frames for this connection
    let (tx, rx) = mpsc::unbounded_channel();
    if let Err(e) = state.relay.connect(connection_id, tx) {
        tracing::error!("Cannot register connection {}: {}", connection_id, e);
        return;
    }

    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receiver_loop(receiver, state.relay.clone(), connection_id);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if let Err(e) = state.relay.disconnect(connection_id) {
        tracing::warn!("Failed to report disconnect of {}: {}", connection_id, e);
    }
}
