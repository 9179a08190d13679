//! Scribble relay server.
//!
//! Relays chat messages and drawing strokes from each connected browser to
//! everyone else and keeps the roster of logged-in nicknames.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin scribble-server
//! cargo run --bin scribble-server -- --host 0.0.0.0 --port 4000 --static-dir ./public
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use scribble_server::{
    infrastructure::message_pusher::WebSocketMessagePusher, ui::Server, usecase::RelayActor,
};
use scribble_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "scribble-server")]
#[command(about = "WebSocket relay for a shared chat and drawing canvas", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Directory with the browser client assets, served at `/`
    #[arg(short = 's', long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // 1. MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 2. Relay actor, the sole owner of the roster
    let (relay, _actor_task) = RelayActor::spawn(message_pusher);

    // 3. Server
    let server = Server::new(relay, args.static_dir);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
