//! Tuning constants for trip estimates.

use chrono::Duration;

/// Weights for the efficiency score.
///
/// The score is a heuristic. Each half starts at 100 and loses points:
/// cost efficiency loses `cost_penalty` per rand-per-km, walking
/// efficiency loses `walking_penalty` per unit of walking-to-riding ratio
/// (km walked / km travelled). Neither half drops below zero; the score is
/// their mean.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Points lost per R/km of fare.
    pub cost_penalty: f64,

    /// Points lost per unit of walking ratio.
    pub walking_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost_penalty: 10.0,
            walking_penalty: 200.0,
        }
    }
}

/// Configuration for duration, walking and efficiency estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterConfig {
    /// Average bus speed at peak time, including stops (km/h).
    pub peak_speed_kmh: f64,

    /// Average bus speed off-peak, including stops (km/h).
    pub off_peak_speed_kmh: f64,

    /// Average wait for a bus at peak time (minutes).
    pub peak_wait_mins: i64,

    /// Average wait for a bus off-peak (minutes).
    /// Longer than peak because buses run less often.
    pub off_peak_wait_mins: i64,

    /// Assumed walking speed (m/s).
    pub walking_speed_mps: f64,

    /// Efficiency score weights.
    pub scoring: ScoringWeights,
}

impl FormatterConfig {
    /// Average speed for the given period.
    pub fn average_speed_kmh(&self, is_peak_time: bool) -> f64 {
        if is_peak_time {
            self.peak_speed_kmh
        } else {
            self.off_peak_speed_kmh
        }
    }

    /// Average waiting time for the given period.
    pub fn waiting_time(&self, is_peak_time: bool) -> Duration {
        Duration::minutes(if is_peak_time {
            self.peak_wait_mins
        } else {
            self.off_peak_wait_mins
        })
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            peak_speed_kmh: 18.0,
            off_peak_speed_kmh: 25.0,
            peak_wait_mins: 8,
            off_peak_wait_mins: 12,
            walking_speed_mps: 1.4,
            scoring: ScoringWeights::default(),
        }
    }
}
