//! HTTP façade for the podium leaderboard.
//!
//! Accepts masked score submissions, stores them through a
//! [`ScoreStore`](podium_store::ScoreStore), and serves JSON top lists and an
//! HTML leaderboard. Store calls run on the blocking thread pool, so every
//! request proceeds independently.

pub mod config;
pub mod error;
pub mod handler;
pub mod render;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::PodiumServer;
pub use state::AppState;
