//! Efficiency score type.

use std::fmt;

use serde::Serialize;

/// A heuristic trip efficiency score in `0..=100`.
///
/// Higher is better. The score is always clamped and rounded at
/// construction; see `formatter::efficiency_score` for how it is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EfficiencyScore(u8);

impl EfficiencyScore {
    pub const MIN: EfficiencyScore = EfficiencyScore(0);
    pub const MAX: EfficiencyScore = EfficiencyScore(100);

    /// Round a raw score and clamp it to `0..=100`. NaN maps to zero.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        EfficiencyScore(raw.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for EfficiencyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
