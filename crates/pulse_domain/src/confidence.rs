use std::fmt;

use serde::{Deserialize, Serialize};

/// The diagnostic service's certainty in a recommendation, on a 0 to 100
/// scale.
///
/// Values are taken as the backend sends them; nothing is rejected on the way
/// in. [`Confidence::percent`] is the only place the value is clamped, since
/// that is what the operator reads.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whole percent shown next to a recommendation, rounded down.
    pub fn percent(&self) -> u8 {
        if self.0.is_nan() {
            return 0;
        }
        self.0.clamp(0.0, Self::MAX).floor() as u8
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::of(*self)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Coarse bucket used to colour the confidence badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn of(confidence: Confidence) -> Self {
        let value = confidence.value();
        if value >= 90.0 {
            ConfidenceTier::High
        } else if value >= 80.0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}
