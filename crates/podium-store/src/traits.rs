use podium_types::ScoreRecord;

use crate::error::StoreResult;
use crate::retention::{self, group_by_category, retain, sort_by_time};

/// A leaderboard store.
///
/// All implementations must satisfy these invariants:
/// - `load` never fails: a missing or unreadable backing store is an empty
///   collection.
/// - After any `append_and_retain`, no category holds more than
///   [`retention_cap`](ScoreStore::retention_cap) records.
/// - Reads never mutate state.
/// - Write failures are returned to the caller, never swallowed.
pub trait ScoreStore: Send + Sync {
    /// The full stored collection, in stored order.
    fn load(&self) -> Vec<ScoreRecord>;

    /// Append an already-validated record, apply retention, persist, and
    /// return the record's rank.
    ///
    /// The rank counts every record (in any category) whose time is at most
    /// `record`'s, measured after the append and before retention. It is at
    /// least 1 and is unaffected by whether retention evicts the record.
    fn append_and_retain(&self, record: ScoreRecord) -> StoreResult<usize>;

    /// Maximum records kept per category.
    fn retention_cap(&self) -> usize;

    /// The `limit` best records across all categories, ascending by time.
    fn top(&self, limit: usize) -> Vec<ScoreRecord> {
        retention::best(retain(self.load(), self.retention_cap()), limit)
    }

    /// The `limit` best records of one category, ascending by time.
    fn top_in_category(&self, category: &str, limit: usize) -> Vec<ScoreRecord> {
        let records = self
            .load()
            .into_iter()
            .filter(|r| r.category() == category)
            .collect();
        retention::best(retain(records, self.retention_cap()), limit)
    }

    /// Every category, sorted by name, each with its best `per_category`
    /// records in ascending time order.
    fn standings(&self, per_category: usize) -> Vec<(String, Vec<ScoreRecord>)> {
        let mut groups = group_by_category(self.load());
        groups.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (_, group) in &mut groups {
            sort_by_time(group);
            group.truncate(per_category.min(self.retention_cap()));
        }
        groups
    }
}
