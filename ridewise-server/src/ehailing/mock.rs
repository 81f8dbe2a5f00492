//! Fixture-backed e-hailing estimator.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::TripQuery;

use super::client::EstimateSource;
use super::error::EstimateError;
use super::types::EstimateResponse;

/// Serves recorded estimates, matched on `pickup` and `dropoff` ignoring
/// case. Unmatched pairs get the 500 the estimator sends when it cannot
/// route a trip.
#[derive(Debug, Clone, Default)]
pub struct MockEHailingClient {
    responses: Arc<Vec<EstimateResponse>>,
}

impl MockEHailingClient {
    /// Load every `*.json` file in a directory as one recorded estimate.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, EstimateError> {
        let data_dir = data_dir.as_ref();
        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            EstimateError::Configuration(format!(
                "Failed to read fixture directory {}: {e}",
                data_dir.display()
            ))
        })?;

        let mut responses = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| {
                    EstimateError::Configuration(format!("Failed to read directory entry: {e}"))
                })?
                .path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| {
                EstimateError::Configuration(format!("Failed to read {}: {e}", path.display()))
            })?;
            let response = serde_json::from_str(&json).map_err(|e| {
                EstimateError::Configuration(format!("Failed to parse {}: {e}", path.display()))
            })?;
            responses.push(response);
        }

        debug!(count = responses.len(), dir = %data_dir.display(), "Loaded estimate fixtures");
        Ok(Self::from_responses(responses))
    }

    pub fn from_responses(responses: Vec<EstimateResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl EstimateSource for MockEHailingClient {
    async fn estimate(&self, query: &TripQuery) -> Result<EstimateResponse, EstimateError> {
        let pickup = query.start().to_lowercase();
        let dropoff = query.end().to_lowercase();

        self.responses
            .iter()
            .find(|r| r.pickup.to_lowercase() == pickup && r.dropoff.to_lowercase() == dropoff)
            .cloned()
            .ok_or_else(|| EstimateError::Upstream {
                status: 500,
                message: format!("Error getting travel data: no recorded route for {query}"),
                url: "fixtures://estimate".to_string(),
            })
    }
}
