use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Duration of a completed run, in seconds. Lower is better.
///
/// Always finite and non-negative, so it has a total order.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RunTime(f64);

impl RunTime {
    pub fn new(seconds: f64) -> Result<Self, TypeError> {
        if seconds.is_finite() && seconds >= 0.0 {
            Ok(Self(seconds))
        } else {
            Err(TypeError::InvalidRunTime(seconds.to_string()))
        }
    }

    pub fn seconds(self) -> f64 {
        self.0
    }
}

impl Eq for RunTime {}

impl PartialOrd for RunTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RunTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for RunTime {
    type Error = TypeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RunTime> for f64 {
    fn from(value: RunTime) -> Self {
        value.0
    }
}

impl fmt::Debug for RunTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunTime({}s)", self.0)
    }
}

impl fmt::Display for RunTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(RunTime::new(0.0).unwrap().seconds(), 0.0);
        assert_eq!(RunTime::new(12.5).unwrap().seconds(), 12.5);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(RunTime::new(-0.01).is_err());
        assert!(RunTime::new(f64::NAN).is_err());
        assert!(RunTime::new(f64::INFINITY).is_err());
    }

    #[test]
    fn ordering_is_ascending() {
        let fast = RunTime::new(3.0).unwrap();
        let slow = RunTime::new(10.0).unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(RunTime::new(3.14159).unwrap().to_string(), "3.14s");
    }

    #[test]
    fn serde_rejects_negative() {
        assert!(serde_json::from_str::<RunTime>("-1.0").is_err());
        let t: RunTime = serde_json::from_str("4").unwrap();
        assert_eq!(t.seconds(), 4.0);
    }
}
