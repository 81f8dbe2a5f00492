//! Fixture-backed MyCiTi client for working without the backend.
//!
//! Loads recorded nearest-stops responses from JSON files and serves them
//! as if they were live API responses.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::TripQuery;

use super::client::TripSource;
use super::error::TripError;

/// Mock MyCiTi client that serves recorded responses.
///
/// A query matches a recording when its start and end equal the recording's
/// `start.address` and `end.address`, ignoring case. Unmatched queries get
/// the 400 the backend sends when it cannot geocode an address, naming the
/// first leg whose address no recording mentions.
#[derive(Debug, Clone, Default)]
pub struct MockMyCitiClient {
    responses: Arc<Vec<Value>>,
}

impl MockMyCitiClient {
    /// Load every `*.json` file in a directory as one recorded response.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TripError> {
        let data_dir = data_dir.as_ref();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            TripError::Configuration(format!(
                "Failed to read fixture directory {}: {e}",
                data_dir.display()
            ))
        })?;

        let mut responses = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                TripError::Configuration(format!("Failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| {
                TripError::Configuration(format!("Failed to read {}: {e}", path.display()))
            })?;

            let response: Value = serde_json::from_str(&json).map_err(|e| {
                TripError::Configuration(format!("Failed to parse {}: {e}", path.display()))
            })?;

            responses.push(response);
        }

        debug!(count = responses.len(), dir = %data_dir.display(), "Loaded trip fixtures");
        Ok(Self::from_responses(responses))
    }

    /// Serve the given responses.
    pub fn from_responses(responses: Vec<Value>) -> Self {
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

    fn find(&self, query: &TripQuery) -> Option<&Value> {
        let start = query.start().to_lowercase();
        let end = query.end().to_lowercase();

        self.responses.iter().find(|response| {
            leg_address(response, "start").as_deref() == Some(start.as_str())
                && leg_address(response, "end").as_deref() == Some(end.as_str())
        })
    }

    /// Whether any recording has this address on either leg.
    fn knows(&self, address: &str) -> bool {
        let address = address.to_lowercase();
        self.responses.iter().any(|response| {
            ["start", "end"]
                .iter()
                .any(|leg| leg_address(response, leg).as_deref() == Some(address.as_str()))
        })
    }

    /// The error the backend would give for an unrecorded pair.
    ///
    /// An address that appears in no recording is treated as ungeocodable,
    /// start first, like the backend.
    fn unmatched(&self, query: &TripQuery) -> TripError {
        let (status, message) = if !self.knows(query.start()) {
            (400, format!("Could not geocode start address: {}", query.start()))
        } else if !self.knows(query.end()) {
            (400, format!("Could not geocode end address: {}", query.end()))
        } else {
            (404, format!("No recorded trip from {query}"))
        };

        TripError::Upstream {
            status,
            message,
            url: format!(
                "fixtures://nearest-stops/?start={}&end={}",
                query.start(),
                query.end()
            ),
        }
    }
}

/// Lowercased `address` of one leg of a recording.
fn leg_address(response: &Value, leg: &str) -> Option<String> {
    response
        .get(leg)
        .and_then(|l| l.get("address"))
        .and_then(Value::as_str)
        .map(str::to_lowercase)
}

impl TripSource for MockMyCitiClient {
    async fn fetch_trip(&self, query: &TripQuery) -> Result<Value, TripError> {
        match self.find(query) {
            Some(response) => Ok(response.clone()),
            None => Err(self.unmatched(query)),
        }
    }
}
