//! Retention and ranking over an in-memory snapshot.
//!
//! Everything here is pure and total: malformed records (no `name`, no
//! `time`) are grouped and ordered like any other record, and an empty
//! snapshot yields an empty result.

use std::collections::HashMap;

use podium_types::ScoreRecord;

/// Maximum records kept per category.
pub const DEFAULT_RETENTION_CAP: usize = 100;

/// Group `records` by category, sort each group ascending by time, and keep
/// the first `cap` of each group.
///
/// The sort is stable, so equal times keep their insertion order. Groups are
/// emitted in order of first appearance.
pub fn retain(records: Vec<ScoreRecord>, cap: usize) -> Vec<ScoreRecord> {
    group_by_category(records)
        .into_iter()
        .flat_map(|(_, mut group)| {
            sort_by_time(&mut group);
            group.truncate(cap);
            group
        })
        .collect()
}

/// Rank of a run with time `time` against `records`: the number of records,
/// across all categories, whose time is less than or equal to it.
///
/// `records` is expected to already contain the run itself, so the result is
/// at least 1 for any finite time. Records without a time never count.
pub fn rank_of(records: &[ScoreRecord], time: f64) -> usize {
    records.iter().filter(|r| r.sort_key() <= time).count()
}

/// Stable ascending sort by time; untimed records go last.
pub fn sort_by_time(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
}

/// The `limit` best records across all categories, ascending by time.
pub fn best(mut records: Vec<ScoreRecord>, limit: usize) -> Vec<ScoreRecord> {
    sort_by_time(&mut records);
    records.truncate(limit);
    records
}

/// Partition `records` by category, preserving first-appearance order of the
/// categories and insertion order within each group.
pub fn group_by_category(records: Vec<ScoreRecord>) -> Vec<(String, Vec<ScoreRecord>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<ScoreRecord>)> = Vec::new();
    for record in records {
        let slot = match index.get(record.category()) {
            Some(&slot) => slot,
            None => {
                let key = record.category().to_string();
                index.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(record);
    }
    groups
}
