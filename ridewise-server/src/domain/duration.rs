//! Whole-minute trip duration with compact display.

use std::fmt;

use serde::{Serialize, Serializer};

/// A trip duration in whole minutes.
///
/// Displays as `"41min"` under an hour, and as `"1h 5min"` or `"2h"` from an
/// hour upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripDuration(u32);

impl TripDuration {
    pub fn from_minutes(minutes: u32) -> Self {
        TripDuration(minutes)
    }

    /// Round a fractional minute count to the nearest whole minute.
    ///
    /// Negative and non-finite inputs become zero.
    pub fn from_fractional_minutes(minutes: f64) -> Self {
        if !minutes.is_finite() || minutes <= 0.0 {
            return TripDuration(0);
        }
        TripDuration(minutes.round().min(u32::MAX as f64) as u32)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0;
        if total < 60 {
            return write!(f, "{total}min");
        }
        let hours = total / 60;
        let minutes = total % 60;
        if minutes > 0 {
            write!(f, "{hours}h {minutes}min")
        } else {
            write!(f, "{hours}h")
        }
    }
}

impl Serialize for TripDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
