use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::limits::{DEFAULT_SCORES_LIMIT, MAX_SCORES_LIMIT};

/// Body of a `POST /submit` request: `{"data": "<masked submission>"}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

impl SubmitEnvelope {
    pub fn new(masked: impl Into<String>) -> Self {
        Self {
            data: Some(Value::String(masked.into())),
        }
    }
}

/// Successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub rank: usize,
}

impl SubmitResponse {
    pub fn ranked(rank: usize) -> Self {
        Self {
            success: true,
            rank,
        }
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            service: "leaderboard".into(),
        }
    }
}

/// Query string of `GET /scores`.
///
/// `limit` is kept as text so that a malformed value falls back to the
/// default instead of rejecting the request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresQuery {
    #[serde(default)]
    pub limit: Option<String>,
    /// Restrict results to one category.
    #[serde(default)]
    pub name: Option<String>,
}

impl ScoresQuery {
    /// Requested limit clamped to `[0, max]`; `default` if absent or not an
    /// integer.
    pub fn effective_limit(&self, default: usize, max: usize) -> usize {
        let requested = self
            .limit
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok());
        match requested {
            Some(n) if n <= 0 => 0,
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX).min(max),
            None => default.min(max),
        }
    }

    /// [`effective_limit`](Self::effective_limit) with the service defaults.
    pub fn limit_or_default(&self) -> usize {
        self.effective_limit(DEFAULT_SCORES_LIMIT, MAX_SCORES_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(limit: &str) -> ScoresQuery {
        ScoresQuery {
            limit: Some(limit.into()),
            name: None,
        }
    }

    #[test]
    fn limit_defaults_to_ten() {
        assert_eq!(ScoresQuery::default().limit_or_default(), 10);
    }

    #[test]
    fn limit_is_clamped_to_fifty() {
        assert_eq!(query("500").limit_or_default(), 50);
        assert_eq!(query("50").limit_or_default(), 50);
        assert_eq!(query("7").limit_or_default(), 7);
    }

    #[test]
    fn non_positive_limit_is_zero() {
        assert_eq!(query("0").limit_or_default(), 0);
        assert_eq!(query("-3").limit_or_default(), 0);
    }

    #[test]
    fn malformed_limit_uses_default() {
        assert_eq!(query("lots").limit_or_default(), 10);
        assert_eq!(query("").limit_or_default(), 10);
    }

    #[test]
    fn health_body() {
        let body = serde_json::to_value(HealthResponse::default()).unwrap();
        assert_eq!(body, json!({"status": "ok", "service": "leaderboard"}));
    }

    #[test]
    fn submit_response_body() {
        let body = serde_json::to_value(SubmitResponse::ranked(3)).unwrap();
        assert_eq!(body, json!({"success": true, "rank": 3}));
    }

    #[test]
    fn envelope_without_data_parses() {
        let env: SubmitEnvelope = serde_json::from_value(json!({"other": 1})).unwrap();
        assert_eq!(env.data, None);
    }
}
