use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::{Category, UNKNOWN_CATEGORY};
use crate::error::TypeError;
use crate::run_time::RunTime;

/// Keys owned by [`ScoreRecord`]; everything else lands in the extension map.
const RESERVED_KEYS: [&str; 3] = ["name", "time", "date"];

/// The stored JSON object, with every field kept exactly as read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct StoredFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// One completed run, as stored in the leaderboard file.
///
/// On disk a record is a JSON object with the category under `name`, the
/// run time in seconds under `time`, and the ISO-8601 UTC ingestion time
/// under `date`. Any other keys are carried through unchanged.
///
/// Records read back from disk are not trusted: `name` or `time` may be
/// missing or of the wrong JSON type. Such values are written back exactly
/// as read. A record without a `name` groups under [`UNKNOWN_CATEGORY`], a
/// non-string `name` groups under its JSON text, and a record whose `time`
/// is missing or not a number sorts after every timed record. Records built
/// with [`ScoreRecord::new`] always satisfy [`ScoreRecord::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredFields", into = "StoredFields")]
pub struct ScoreRecord {
    fields: StoredFields,
    category: Option<String>,
    time: Option<f64>,
}

impl From<StoredFields> for ScoreRecord {
    fn from(fields: StoredFields) -> Self {
        let category = match &fields.name {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(other) => Some(other.to_string()),
        };
        let time = fields.time.as_ref().and_then(Value::as_f64);
        Self {
            fields,
            category,
            time,
        }
    }
}

impl From<ScoreRecord> for StoredFields {
    fn from(record: ScoreRecord) -> Self {
        record.fields
    }
}

impl ScoreRecord {
    /// Create a record for a run ingested at `date`.
    pub fn new(category: Category, time: RunTime, date: DateTime<Utc>) -> Self {
        Self::from(StoredFields {
            name: Some(Value::String(category.into_inner())),
            time: Some(Value::from(time.seconds())),
            date: Some(Value::String(format_timestamp(date))),
            extra: Map::new(),
        })
    }

    /// Attach extra client fields. Reserved keys (`name`, `time`, `date`)
    /// are ignored so they cannot shadow the typed fields.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.fields.extra = extra
            .into_iter()
            .filter(|(k, _)| !RESERVED_KEYS.contains(&k.as_str()))
            .collect();
        self
    }

    /// Grouping key. Falls back to [`UNKNOWN_CATEGORY`] for untagged records.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn time(&self) -> Option<f64> {
        self.time
    }

    /// Time used for ordering; a missing time is the worst possible time.
    pub fn sort_key(&self) -> f64 {
        self.time.unwrap_or(f64::INFINITY)
    }

    pub fn date(&self) -> Option<&str> {
        self.fields.date.as_ref().and_then(Value::as_str)
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.fields.extra
    }

    /// Check the stored-record invariant: a valid category and a finite,
    /// non-negative time.
    pub fn validate(&self) -> Result<(), TypeError> {
        let category = self
            .fields
            .name
            .as_ref()
            .and_then(Value::as_str)
            .ok_or(TypeError::MissingField("name"))?;
        Category::new(category)?;
        let time = self.time.ok_or(TypeError::MissingField("time"))?;
        RunTime::new(time)?;
        Ok(())
    }
}

/// Timestamp string for a record ingested now.
pub fn ingestion_timestamp() -> String {
    format_timestamp(Utc::now())
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
