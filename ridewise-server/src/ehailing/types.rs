//! E-hailing estimator request and response types.
//!
//! `POST /estimate` takes `{"pickup_address": .., "drop_address": ..}` and
//! answers with one priced entry per ride type:
//!
//! ```json
//! {
//!   "pickup": "Civic Centre",
//!   "dropoff": "Sea Point",
//!   "distance_km": 4.87,
//!   "rides": [
//!     { "ride_type": "UberX", "price": 40.35, "wait_time": "3 min", "travel_time": "12 mins" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::Rands;

/// Body of an estimate request.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateRequest<'a> {
    pub pickup_address: &'a str,
    pub drop_address: &'a str,
}

/// Priced ride types for one pickup/drop-off pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EstimateResponse {
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub dropoff: String,
    pub distance_km: f64,
    pub rides: Vec<RideEstimate>,
}

impl EstimateResponse {
    /// The lowest-priced ride type, if any has a usable price.
    pub fn cheapest(&self) -> Option<&RideEstimate> {
        self.rides
            .iter()
            .filter(|ride| ride.price.is_finite())
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }
}

/// One ride type's estimate. Times are display strings such as "12 mins".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RideEstimate {
    pub ride_type: String,
    pub price: f64,
    pub wait_time: String,
    pub travel_time: String,
}

impl RideEstimate {
    pub fn fare(&self) -> Rands {
        Rands(self.price)
    }
}
