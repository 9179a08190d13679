//! Server execution logic.

use std::{future::Future, path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::usecase::RelayHandle;

use super::{
    error::ServerError,
    handler::{get_roster, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Relay server
///
/// Serves the WebSocket relay at `/ws`, a small HTTP API under `/api`, and
/// optionally the browser assets from a directory.
///
/// # Example
///
/// ```ignore
/// let (relay, _actor) = RelayActor::spawn(Arc::new(WebSocketMessagePusher::new()));
/// let server = Server::new(relay, None);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    relay: RelayHandle,
    static_dir: Option<PathBuf>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `relay` - Handle to the running relay actor
    /// * `static_dir` - Directory with the browser assets, served at `/` when set
    pub fn new(relay: RelayHandle, static_dir: Option<PathBuf>) -> Self {
        Self { relay, static_dir }
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            relay: self.relay.clone(),
        });

        let router = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/roster", get(get_roster))
            .with_state(app_state);

        let router = match &self.static_dir {
            Some(dir) => {
                tracing::info!("Serving static files from {}", dir.display());
                router.fallback_service(ServeDir::new(dir))
            }
            None => router,
        };

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the relay server until Ctrl+C or SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), ServerError> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: bind_addr.clone(),
                source,
            })?;

        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();

        tracing::info!("Scribble relay listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
