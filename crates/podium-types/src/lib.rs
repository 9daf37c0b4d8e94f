//! Foundation types for podium.
//!
//! This crate provides the data model shared by the score store and the
//! HTTP façade. Every other podium crate depends on `podium-types`.
//!
//! # Key Types
//!
//! - [`ScoreRecord`]: One completed run, as persisted in the leaderboard file
//! - [`Category`]: Validated grouping key (level name)
//! - [`RunTime`]: Validated run duration in seconds (lower is better)

pub mod category;
pub mod error;
pub mod record;
pub mod run_time;

pub use category::{Category, ANONYMOUS_CATEGORY, MAX_CATEGORY_LEN, UNKNOWN_CATEGORY};
pub use error::TypeError;
pub use record::{ingestion_timestamp, ScoreRecord};
pub use run_time::RunTime;
