use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("category must not be empty")]
    EmptyCategory,

    #[error("category too long: {len} characters (max {max})")]
    CategoryTooLong { len: usize, max: usize },

    #[error("category contains non-printable character {0:?}")]
    NonPrintableCategory(char),

    #[error("run time must be finite and non-negative, got {0}")]
    InvalidRunTime(String),

    #[error("record is missing required field: {0}")]
    MissingField(&'static str),
}
