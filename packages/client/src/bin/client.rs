//! Terminal client for the Scribble relay.
//!
//! Logs in with a nickname and joins the shared chat. Typed lines are sent as
//! chat messages; `/who`, `/fill <color>`, `/help` and `/quit` are commands.
//! Reconnects on connection loss (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin scribble-client -- --nickname Alice
//! cargo run --bin scribble-client -- -n Bob -u ws://127.0.0.1:4000/ws
//! ```

use clap::Parser;

use scribble_client::run_client;
use scribble_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "scribble-client")]
#[command(about = "Terminal client for the Scribble chat and drawing relay", long_about = None)]
struct Args {
    /// Nickname shown to the other players
    #[arg(short = 'n', long)]
    nickname: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(args.url, args.nickname).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
