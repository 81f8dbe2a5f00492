//! Pure estimate functions: duration, walking time and efficiency.

use crate::domain::{EfficiencyScore, Rands, TripDuration, WalkingDistance};

use super::config::{FormatterConfig, ScoringWeights};

/// Estimate door-to-door bus time: time in the bus plus average wait.
///
/// Transit time is `distance / average speed`; the total is rounded to the
/// nearest minute.
pub fn estimate_duration(
    distance_km: f64,
    is_peak_time: bool,
    config: &FormatterConfig,
) -> TripDuration {
    let speed = config.average_speed_kmh(is_peak_time);
    let transit_mins = if speed > 0.0 {
        distance_km / speed * 60.0
    } else {
        0.0
    };
    let waiting_mins = config.waiting_time(is_peak_time).num_minutes() as f64;

    TripDuration::from_fractional_minutes(transit_mins + waiting_mins)
}

/// Minutes to walk a distance at the configured walking speed, rounded up.
pub fn walking_minutes(distance: WalkingDistance, config: &FormatterConfig) -> u32 {
    distance.walking_minutes(config.walking_speed_mps)
}

/// Score a trip from 0 (poor) to 100 (cheap, little walking).
///
/// Averages a cost half, `100 - fare_per_km * cost_penalty`, and a walking
/// half, `100 - (km walked / km travelled) * walking_penalty`, each floored
/// at zero. A trip with no positive distance scores zero.
pub fn efficiency_score(
    distance_km: f64,
    walking: WalkingDistance,
    fare: Rands,
    weights: &ScoringWeights,
) -> EfficiencyScore {
    if distance_km.is_nan() || distance_km <= 0.0 {
        return EfficiencyScore::MIN;
    }

    let walking_ratio = walking.kilometers() / distance_km;
    let fare_per_km = fare.per_km(distance_km).amount();
    let cost_efficiency = (100.0 - fare_per_km * weights.cost_penalty).max(0.0);
    let walking_efficiency = (100.0 - walking_ratio * weights.walking_penalty).max(0.0);

    EfficiencyScore::from_raw((cost_efficiency + walking_efficiency) / 2.0)
}
