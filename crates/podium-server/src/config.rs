use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use podium_protocol::limits::{DEFAULT_SCORES_LIMIT, LEADERBOARD_ROWS, MAX_SCORES_LIMIT};
use podium_protocol::DEFAULT_MASK_PREFIX;
use podium_store::StoreConfig;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
    /// Prefix of the submission masking codec.
    pub mask_prefix: String,
    pub default_limit: usize,
    pub max_limit: usize,
    /// Rows per category on the HTML leaderboard.
    pub leaderboard_rows: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            store: StoreConfig::default(),
            mask_prefix: DEFAULT_MASK_PREFIX.to_string(),
            default_limit: DEFAULT_SCORES_LIMIT,
            max_limit: MAX_SCORES_LIMIT,
            leaderboard_rows: LEADERBOARD_ROWS,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read a TOML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_store::WriteMode;
    use std::path::PathBuf;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.store.path, PathBuf::from("/var/lib/leaderboard/scores.json"));
        assert_eq!(c.mask_prefix, "underwater_");
        assert_eq!(c.default_limit, 10);
        assert_eq!(c.max_limit, 50);
        assert_eq!(c.leaderboard_rows, 50);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:8080"

            [store]
            path = "/tmp/board/scores.json"
            write_mode = "serialized"
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 8080);
        assert_eq!(c.store.path, PathBuf::from("/tmp/board/scores.json"));
        assert_eq!(c.store.write_mode, WriteMode::Serialized);
        assert_eq!(c.store.retention_cap, 100);
        assert_eq!(c.max_limit, 50);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 5").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("podium.toml");
        std::fs::write(&path, "mask_prefix = \"reef_\"\n").unwrap();
        assert_eq!(ServerConfig::load(&path).unwrap().mask_prefix, "reef_");
        assert!(matches!(
            ServerConfig::load(&dir.path().join("missing.toml")),
            Err(ServerError::Io(_))
        ));
    }
}
