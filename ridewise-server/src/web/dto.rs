//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::truncate_address;
use crate::formatter::TripSummary;
use crate::rides::RideOption;

/// Request to look up a trip.
///
/// Both locations are optional here so that a missing parameter reaches
/// validation and gets the same message as an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct TripRequest {
    /// Start address
    pub start: Option<String>,

    /// End address
    pub end: Option<String>,

    /// Shorten autocomplete addresses to their first two segments
    #[serde(default)]
    pub short: bool,
}

impl TripRequest {
    /// The start and end to look up, shortened if requested.
    pub fn locations(&self, force_truncate: bool) -> (String, String) {
        let start = self.start.as_deref().unwrap_or_default();
        let end = self.end.as_deref().unwrap_or_default();
        if self.short || force_truncate {
            (truncate_address(start), truncate_address(end))
        } else {
            (start.to_string(), end.to_string())
        }
    }
}

/// Response for a trip lookup.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Formatted MyCiTi trip
    pub trip: TripSummary,

    /// Ride option cards in display order
    pub rides: Vec<RideOption>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
