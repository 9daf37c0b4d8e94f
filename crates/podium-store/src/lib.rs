//! Durable leaderboard storage for podium.
//!
//! The store owns a single JSON file holding every score record. Each write
//! is a full read-modify-write of that file: load the snapshot, append one
//! record, apply per-category retention, and atomically publish the new
//! snapshot.
//!
//! # Storage Backends
//!
//! All backends implement the [`ScoreStore`] trait:
//!
//! - [`FileScoreStore`] -- file-backed store with OS advisory locking
//! - [`InMemoryScoreStore`] -- `Vec`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Reads never fail. A missing or corrupt file loads as empty.
//! 2. Writes never leave a partial document: temp file, fsync, rename.
//! 3. No category holds more than the retention cap after a write.
//! 4. Rank is a global count taken before retention.
//! 5. Write errors are propagated, never silently dropped.
//! 6. Configuration is injected per instance; there is no global state.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod retention;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{StoreConfig, WriteMode, DEFAULT_SCORES_PATH};
pub use error::{StoreError, StoreResult};
pub use file::FileScoreStore;
pub use memory::InMemoryScoreStore;
pub use retention::{rank_of, retain, DEFAULT_RETENTION_CAP};
pub use traits::ScoreStore;
