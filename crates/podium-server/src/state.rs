use std::sync::Arc;

use podium_protocol::MaskingCodec;
use podium_store::ScoreStore;

use crate::config::ServerConfig;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
    pub codec: MaskingCodec,
    pub default_limit: usize,
    pub max_limit: usize,
    pub leaderboard_rows: usize,
}

impl AppState {
    /// State backed by `store` with the limits and codec from `config`.
    pub fn new(store: Arc<dyn ScoreStore>, config: &ServerConfig) -> Self {
        Self {
            store,
            codec: MaskingCodec::new(config.mask_prefix.clone()),
            default_limit: config.default_limit,
            max_limit: config.max_limit,
            leaderboard_rows: config.leaderboard_rows,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("codec", &self.codec)
            .field("default_limit", &self.default_limit)
            .field("max_limit", &self.max_limit)
            .field("leaderboard_rows", &self.leaderboard_rows)
            .finish_non_exhaustive()
    }
}
