//! MyCiTi nearest-stops backend client.
//!
//! The backend geocodes both addresses, finds the closest MyCiTi stop to
//! each, and prices the trip. This module fetches that answer and decodes
//! it; it does none of that computation itself.
//!
//! Two sources are available:
//! - [`MyCitiClient`] talks to the live backend over HTTP
//! - [`MockMyCitiClient`] replays recorded responses from disk

mod client;
mod error;
mod mock;
mod types;

pub use client::{BASE_URL_ENV, DEFAULT_BASE_URL, MyCitiClient, MyCitiConfig, TripSource};
pub use error::{CONNECTION_MESSAGE, INVALID_RESPONSE_MESSAGE, TripError, TripErrorKind};
pub use mock::MockMyCitiClient;
pub use types::{Coordinates, NearestStop, REQUIRED_FIELDS, StopLocation, TripResponse};

use serde_json::Value;

use crate::domain::TripQuery;

/// The trip source chosen at startup.
#[derive(Debug, Clone)]
pub enum MyCitiBackend {
    /// Live backend over HTTP
    Http(MyCitiClient),
    /// Recorded responses (offline development)
    Fixtures(MockMyCitiClient),
}

impl TripSource for MyCitiBackend {
    async fn fetch_trip(&self, query: &TripQuery) -> Result<Value, TripError> {
        match self {
            MyCitiBackend::Http(client) => client.fetch_trip(query).await,
            MyCitiBackend::Fixtures(client) => client.fetch_trip(query).await,
        }
    }
}
