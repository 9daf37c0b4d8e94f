use std::sync::Arc;

use tokio::net::TcpListener;

use podium_store::FileScoreStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Leaderboard HTTP server.
pub struct PodiumServer {
    config: ServerConfig,
}

impl PodiumServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the configured store and build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let store = FileScoreStore::open(self.config.store.clone())?;
        Ok(build_router(AppState::new(Arc::new(store), &self.config)))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            store = %self.config.store.path.display(),
            "leaderboard server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
