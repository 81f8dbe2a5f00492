//! MyCiTi nearest-stops response types.
//!
//! These types mirror the JSON returned by `GET /nearest-stops/`:
//!
//! ```json
//! {
//!   "start": { "address": "...", "coordinates": [-33.92, 18.42],
//!              "nearest_stop": "Civic Centre", "distance_meters": 212.4 },
//!   "end":   { ... },
//!   "trip_distance_km": 4.87,
//!   "is_peak_time": false,
//!   "fare_rands": 10.5
//! }
//! ```
//!
//! The backend is loose about leg contents (the stop name may be bare or
//! wrapped in an object, and both stop and distance are null when it has no
//! stop data), so leg fields are lenient. The five top-level fields are
//! required.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::domain::WalkingDistance;

use super::error::{INVALID_RESPONSE_MESSAGE, TripError};

/// Top-level fields every nearest-stops response must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "start",
    "end",
    "trip_distance_km",
    "is_peak_time",
    "fare_rands",
];

/// A validated nearest-stops response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripResponse {
    pub start: StopLocation,
    pub end: StopLocation,
    pub trip_distance_km: f64,
    pub is_peak_time: bool,
    pub fare_rands: f64,
}

impl TripResponse {
    /// Check the shape of a raw response body and decode it.
    ///
    /// Non-objects are rejected outright; objects must contain every entry
    /// of [`REQUIRED_FIELDS`] (checked in order, so the first missing field
    /// is the one reported). Type mismatches inside present fields are
    /// reported as malformed too.
    pub fn from_value(value: Value) -> Result<Self, TripError> {
        let Value::Object(map) = &value else {
            return Err(TripError::invalid_response());
        };

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|field| !map.contains_key(**field))
        {
            return Err(TripError::missing_field(missing));
        }

        serde_json::from_value(value).map_err(|e| {
            TripError::MalformedResponse(format!("{INVALID_RESPONSE_MESSAGE}: {e}"))
        })
    }

    /// Combined walk to the boarding stop and from the alighting stop.
    pub fn total_walking_distance(&self) -> WalkingDistance {
        self.start.walking_distance() + self.end.walking_distance()
    }
}

/// One end of a trip as resolved by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StopLocation {
    /// The address as submitted
    #[serde(default)]
    pub address: String,

    /// Geocoded position of the address
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    /// Closest MyCiTi stop
    #[serde(default)]
    pub nearest_stop: Option<NearestStop>,

    /// Straight-line distance from the address to the stop
    #[serde(default)]
    pub distance_meters: Option<f64>,
}

impl StopLocation {
    /// Name of the nearest stop, if the backend resolved one.
    pub fn nearest_stop_name(&self) -> Option<&str> {
        self.nearest_stop.as_ref().and_then(NearestStop::name)
    }

    /// Distance to the nearest stop; zero when the backend gave none.
    pub fn walking_distance(&self) -> WalkingDistance {
        WalkingDistance::from_meters(self.distance_meters.unwrap_or(0.0))
    }
}

/// Nearest stop, either `{ "name": ... }` or a bare name string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NearestStop {
    Named {
        #[serde(default)]
        name: Option<String>,
    },
    Bare(String),
}

impl NearestStop {
    pub fn name(&self) -> Option<&str> {
        match self {
            NearestStop::Named { name } => name.as_deref(),
            NearestStop::Bare(name) => Some(name),
        }
    }
}

/// A latitude/longitude pair.
///
/// Accepts `[lat, lng]` or `{ "lat": .., "lng": .. }` and always
/// serializes as `[lat, lng]`, ready for a map marker.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "CoordinatesRepr")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinatesRepr {
    Pair(f64, f64),
    Object { lat: f64, lng: f64 },
}

impl From<CoordinatesRepr> for Coordinates {
    fn from(repr: CoordinatesRepr) -> Self {
        match repr {
            CoordinatesRepr::Pair(lat, lng) | CoordinatesRepr::Object { lat, lng } => {
                Coordinates { lat, lng }
            }
        }
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.lat, self.lng).serialize(serializer)
    }
}
