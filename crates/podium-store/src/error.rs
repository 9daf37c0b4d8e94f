use std::path::PathBuf;

/// Errors from score store operations.
///
/// Reads never produce these: a missing or corrupt leaderboard file loads
/// as an empty collection. Only writes fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Writing or publishing the snapshot failed. The canonical file is left
    /// in its last complete state.
    #[error("failed to write leaderboard {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error outside the write path (directory creation, writer lock).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An in-process lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
