use thiserror::Error;

/// Reasons a submission is rejected. All of these are client errors.
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    #[error("no data")]
    NoData,

    #[error("invalid data")]
    InvalidData,

    #[error("missing fields")]
    MissingFields,

    #[error("invalid score data: {0}")]
    InvalidScore(String),
}

impl ProtocolError {
    /// Message returned to the client in the `error` field.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::NoData => "no data",
            Self::InvalidData => "invalid data",
            Self::MissingFields => "missing fields",
            Self::InvalidScore(_) => "invalid score data",
        }
    }
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
