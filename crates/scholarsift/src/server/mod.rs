//! HTTP server: the browser UI and the JSON/download API.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::ArxivClient;
use crate::config::Config;

/// Shared state for HTTP handlers.
pub struct AppState {
    /// arXiv API client.
    pub client: ArxivClient,

    /// Service configuration (result clamping).
    pub config: Config,
}

/// The ScholarSift web server.
pub struct WebServer {
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new server around a client.
    #[must_use]
    pub fn new(client: ArxivClient, config: Config) -> Self {
        Self { state: Arc::new(AppState { client, config }) }
    }

    /// Run the server until ctrl-c.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self, bind: [u8; 4], port: u16) -> anyhow::Result<()> {
        let router = routes::create_router(self.state);
        let addr = SocketAddr::from((bind, port));

        tracing::info!("ScholarSift listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for WebServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebServer").finish_non_exhaustive()
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
