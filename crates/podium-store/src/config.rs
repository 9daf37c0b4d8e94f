use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::retention::DEFAULT_RETENTION_CAP;

/// Default location of the leaderboard file.
pub const DEFAULT_SCORES_PATH: &str = "/var/lib/leaderboard/scores.json";

/// How concurrent `append_and_retain` calls are ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Load and persist are locked separately. Two writers that load the same
    /// snapshot race, and the last persist to finish wins; the other record
    /// is lost from disk even though its rank was returned.
    #[default]
    LastWriterWins,
    /// An exclusive lock on a sidecar `<path>.lock` file is held across the
    /// whole load, mutate, persist span. Writers in other threads and other
    /// processes queue behind it.
    Serialized,
}

/// Configuration for a [`FileScoreStore`](crate::FileScoreStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Canonical path of the leaderboard file.
    pub path: PathBuf,
    /// Maximum records kept per category.
    pub retention_cap: usize,
    /// Writer ordering strategy.
    pub write_mode: WriteMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCORES_PATH),
            retention_cap: DEFAULT_RETENTION_CAP,
            write_mode: WriteMode::default(),
        }
    }
}

impl StoreConfig {
    /// Default configuration backed by `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_retention_cap(mut self, retention_cap: usize) -> Self {
        self.retention_cap = retention_cap;
        self
    }

    /// Directory holding the leaderboard file and its temporary siblings.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// File name prefix for temporary snapshot files, e.g. `scores.json.`.
    pub fn temp_prefix(&self) -> OsString {
        let mut prefix = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("scores"));
        prefix.push(".");
        prefix
    }

    /// Sidecar file locked by [`WriteMode::Serialized`] writers.
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = StoreConfig::default();
        assert_eq!(c.path, PathBuf::from(DEFAULT_SCORES_PATH));
        assert_eq!(c.retention_cap, 100);
        assert_eq!(c.write_mode, WriteMode::LastWriterWins);
    }

    #[test]
    fn derived_paths() {
        let c = StoreConfig::at("/data/board/scores.json");
        assert_eq!(c.dir(), Path::new("/data/board"));
        assert_eq!(c.temp_prefix(), OsString::from("scores.json."));
        assert_eq!(c.lock_path(), PathBuf::from("/data/board/scores.json.lock"));
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let c = StoreConfig::at("scores.json");
        assert_eq!(c.dir(), Path::new("."));
    }

    #[test]
    fn write_mode_serde_names() {
        let json = serde_json::to_string(&WriteMode::Serialized).unwrap();
        assert_eq!(json, "\"serialized\"");
        let mode: WriteMode = serde_json::from_str("\"last_writer_wins\"").unwrap();
        assert_eq!(mode, WriteMode::LastWriterWins);
    }
}
