use std::sync::RwLock;

use podium_types::ScoreRecord;

use crate::error::{StoreError, StoreResult};
use crate::retention::{rank_of, retain, DEFAULT_RETENTION_CAP};
use crate::traits::ScoreStore;

/// In-memory leaderboard store.
///
/// Intended for tests and embedding. Records live in a `Vec` behind a
/// `RwLock`; an append holds the write lock for its whole span, so writers
/// never lose each other's records.
pub struct InMemoryScoreStore {
    records: RwLock<Vec<ScoreRecord>>,
    retention_cap: usize,
}

impl InMemoryScoreStore {
    /// Create an empty store with the default retention cap.
    pub fn new() -> Self {
        Self::with_retention_cap(DEFAULT_RETENTION_CAP)
    }

    pub fn with_retention_cap(retention_cap: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            retention_cap,
        }
    }

    /// Create a store pre-populated with `records`, stored as given.
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            retention_cap: DEFAULT_RETENTION_CAP,
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn load(&self) -> Vec<ScoreRecord> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn append_and_retain(&self, record: ScoreRecord) -> StoreResult<usize> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let time = record.sort_key();
        let mut snapshot = std::mem::take(&mut *records);
        snapshot.push(record);
        let rank = rank_of(&snapshot, time);
        *records = retain(snapshot, self.retention_cap);
        Ok(rank)
    }

    fn retention_cap(&self) -> usize {
        self.retention_cap
    }
}

impl std::fmt::Debug for InMemoryScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryScoreStore")
            .field("record_count", &self.len())
            .field("retention_cap", &self.retention_cap)
            .finish()
    }
}
