use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use fs2::FileExt;
use podium_types::ScoreRecord;
use tracing::{debug, warn};

use crate::config::{StoreConfig, WriteMode};
use crate::error::{StoreError, StoreResult};
use crate::retention::{rank_of, retain};
use crate::traits::ScoreStore;

/// Advisory lock on a borrowed file, released on drop.
struct LockGuard<'a> {
    file: &'a File,
}

impl<'a> LockGuard<'a> {
    fn shared(file: &'a File) -> io::Result<Self> {
        file.lock_shared()?;
        Ok(Self { file })
    }

    fn exclusive(file: &'a File) -> io::Result<Self> {
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Exclusive lock on the writer sidecar, held for a whole write transaction.
struct WriterLock {
    file: File,
}

impl Drop for WriterLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Leaderboard store backed by a single JSON file.
///
/// The whole collection is read on every operation and rewritten on every
/// append; nothing is cached in process. Reads take a shared lock on the
/// canonical file. Writes go to a fresh temporary file in the same directory
/// under an exclusive lock, are synced to disk, and are then renamed over
/// the canonical path, so readers only ever see a complete snapshot.
///
/// Multiple instances (in one process or many) may share a path; the
/// locks are OS advisory locks.
#[derive(Debug)]
pub struct FileScoreStore {
    config: StoreConfig,
}

impl FileScoreStore {
    /// Open a store, creating the parent directory if needed.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(config.dir())?;
        debug!(
            path = %config.path.display(),
            write_mode = ?config.write_mode,
            "opened score store"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Read the current snapshot.
    ///
    /// A missing file, an unreadable file, or a file that does not parse all
    /// yield an empty collection.
    pub fn load(&self) -> Vec<ScoreRecord> {
        let bytes = match self.read_snapshot() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(path = %self.path().display(), "no leaderboard file; starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path().display(), error = %e, "failed to read leaderboard; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<ScoreRecord>>(&bytes) {
            Ok(records) => {
                debug!(records = records.len(), "leaderboard loaded");
                records
            }
            Err(e) => {
                warn!(path = %self.path().display(), error = %e, "corrupt leaderboard file; treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the canonical file with `records`.
    ///
    /// Retention is not applied here. On failure the canonical file is
    /// untouched and the temporary file is removed.
    pub fn persist(&self, records: &[ScoreRecord]) -> StoreResult<()> {
        let bytes =
            serde_json::to_vec(records).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let prefix = self.config.temp_prefix();
        let tmp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(self.config.dir())
            .map_err(|e| self.write_error(e))?;

        {
            let file = tmp.as_file();
            let _lock = LockGuard::exclusive(file).map_err(|e| self.write_error(e))?;
            let mut writer: &File = file;
            writer.write_all(&bytes).map_err(|e| self.write_error(e))?;
            writer.flush().map_err(|e| self.write_error(e))?;
            file.sync_all().map_err(|e| self.write_error(e))?;
        }

        tmp.persist(self.path())
            .map_err(|e| self.write_error(e.error))?;

        debug!(
            path = %self.path().display(),
            records = records.len(),
            bytes = bytes.len(),
            "leaderboard persisted"
        );
        Ok(())
    }

    fn read_snapshot(&self) -> io::Result<Option<Vec<u8>>> {
        let file = match File::open(self.path()) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut bytes = Vec::new();
        let _lock = LockGuard::shared(&file)?;
        (&file).read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }

    fn lock_writers(&self) -> StoreResult<WriterLock> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.config.lock_path())?;
        file.lock_exclusive()?;
        Ok(WriterLock { file })
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.config.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Vec<ScoreRecord> {
        FileScoreStore::load(self)
    }

    fn append_and_retain(&self, record: ScoreRecord) -> StoreResult<usize> {
        debug_assert!(record.validate().is_ok(), "invalid record: {record:?}");

        let _writer = match self.config.write_mode {
            WriteMode::Serialized => Some(self.lock_writers()?),
            WriteMode::LastWriterWins => None,
        };

        let time = record.sort_key();
        let mut records = self.load();
        records.push(record);
        let rank = rank_of(&records, time);

        let retained = retain(records, self.config.retention_cap);
        self.persist(&retained)?;

        debug!(rank, stored = retained.len(), "score appended");
        Ok(rank)
    }

    fn retention_cap(&self) -> usize {
        self.config.retention_cap
    }
}
