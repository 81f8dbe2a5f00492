//! Display-ready trip summary built from a nearest-stops response.
//!
//! Serialized with camelCase keys so browser code can render it directly.

use serde::Serialize;

use crate::domain::{EfficiencyScore, Rands, TripDuration, WalkingDistance};
use crate::myciti::{Coordinates, StopLocation, TripResponse};

use super::config::FormatterConfig;
use super::estimate::{efficiency_score, estimate_duration, walking_minutes};

/// Provider name used in the comparison record.
pub const PROVIDER: &str = "MyCiTi Bus";

/// Transport category used in the comparison record.
pub const TRANSPORT_TYPE: &str = "Public Transport";

/// A formatted trip: overview, per-leg breakdown and comparison figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub summary: TripOverview,
    pub details: TripDetails,
    pub comparison: TripComparison,
}

/// Headline figures for the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOverview {
    pub from: String,
    pub to: String,
    /// e.g. "5.0 km"
    pub distance: String,
    /// e.g. "R25.00"
    pub fare: String,
    /// e.g. "24min"
    pub duration: String,
    pub peak_time: bool,
}

/// Breakdown of both walking legs and the ride itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub start: LegDetails,
    pub end: LegDetails,
    pub trip: RideDetails,
}

/// Walk between an address and its nearest stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDetails {
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub nearest_stop: Option<String>,
    /// e.g. "200m"
    pub walking_distance: String,
    /// e.g. "3min"
    pub walking_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideDetails {
    pub distance_km: f64,
    pub fare_rands: f64,
    pub is_peak_time: bool,
    /// "Peak Fare" or "Saver Fare"
    pub fare_type: String,
    /// e.g. "R5.00/km"
    pub cost_per_km: String,
    pub total_walking_distance: String,
    pub total_walking_time: String,
}

/// Raw figures for comparing against other ride options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripComparison {
    pub provider: String,
    #[serde(rename = "type")]
    pub transport_type: String,
    pub fare: f64,
    pub distance: f64,
    pub estimated_duration: TripDuration,
    /// Total walking in whole meters
    pub walking_required: u64,
    pub efficiency: EfficiencyScore,
}

/// Fare label for the period.
pub fn fare_type(is_peak_time: bool) -> &'static str {
    if is_peak_time { "Peak Fare" } else { "Saver Fare" }
}

/// Build the summary for a validated response.
pub fn summarize(response: &TripResponse, config: &FormatterConfig) -> TripSummary {
    let fare = Rands(response.fare_rands);
    let distance_km = response.trip_distance_km;
    let total_walking = response.total_walking_distance();
    let duration = estimate_duration(distance_km, response.is_peak_time, config);

    TripSummary {
        summary: TripOverview {
            from: response.start.address.clone(),
            to: response.end.address.clone(),
            distance: format!("{distance_km:.1} km"),
            fare: fare.to_string(),
            duration: duration.to_string(),
            peak_time: response.is_peak_time,
        },
        details: TripDetails {
            start: leg_details(&response.start, config),
            end: leg_details(&response.end, config),
            trip: RideDetails {
                distance_km,
                fare_rands: fare.amount(),
                is_peak_time: response.is_peak_time,
                fare_type: fare_type(response.is_peak_time).to_string(),
                cost_per_km: format!("{}/km", fare.per_km(distance_km)),
                total_walking_distance: total_walking.to_string(),
                total_walking_time: walking_time(total_walking, config),
            },
        },
        comparison: TripComparison {
            provider: PROVIDER.to_string(),
            transport_type: TRANSPORT_TYPE.to_string(),
            fare: fare.amount(),
            distance: distance_km,
            estimated_duration: duration,
            walking_required: total_walking.rounded_meters(),
            efficiency: efficiency_score(distance_km, total_walking, fare, &config.scoring),
        },
    }
}

fn leg_details(leg: &StopLocation, config: &FormatterConfig) -> LegDetails {
    let walking = leg.walking_distance();
    LegDetails {
        address: leg.address.clone(),
        coordinates: leg.coordinates,
        nearest_stop: leg.nearest_stop_name().map(str::to_string),
        walking_distance: walking.to_string(),
        walking_time: walking_time(walking, config),
    }
}

fn walking_time(distance: WalkingDistance, config: &FormatterConfig) -> String {
    format!("{}min", walking_minutes(distance, config))
}
