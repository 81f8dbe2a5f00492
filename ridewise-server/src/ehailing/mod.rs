//! E-hailing fare estimator client.
//!
//! The estimator prices UberX, UberXL and UberVan for a pickup/drop-off
//! pair. Its answer only fills the e-hailing card; a failed estimate never
//! fails a trip lookup.

mod client;
mod error;
mod mock;
mod types;

pub use client::{BASE_URL_ENV, DEFAULT_BASE_URL, EHailingClient, EHailingConfig, EstimateSource};
pub use error::EstimateError;
pub use mock::MockEHailingClient;
pub use types::{EstimateRequest, EstimateResponse, RideEstimate};

use crate::domain::TripQuery;

/// The estimate source chosen at startup.
#[derive(Debug, Clone)]
pub enum EHailingBackend {
    Http(EHailingClient),
    Fixtures(MockEHailingClient),
}

impl EstimateSource for EHailingBackend {
    async fn estimate(&self, query: &TripQuery) -> Result<EstimateResponse, EstimateError> {
        match self {
            EHailingBackend::Http(client) => client.estimate(query).await,
            EHailingBackend::Fixtures(client) => client.estimate(query).await,
        }
    }
}
