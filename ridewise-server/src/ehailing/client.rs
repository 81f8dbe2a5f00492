//! E-hailing fare estimator HTTP client.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::domain::TripQuery;

use super::error::EstimateError;
use super::types::{EstimateRequest, EstimateResponse};

/// Default base URL of the estimator.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "UBER_API_URL";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ESTIMATE_PATH: &str = "estimate";

/// Anything that can price e-hailing rides for a validated trip.
pub trait EstimateSource: Send + Sync {
    fn estimate(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<EstimateResponse, EstimateError>> + Send;
}

/// Configuration for the e-hailing client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EHailingConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl EHailingConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a config from `UBER_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new().with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for EHailingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the e-hailing estimator.
#[derive(Debug, Clone)]
pub struct EHailingClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl EHailingClient {
    pub fn new(config: EHailingConfig) -> Result<Self, EstimateError> {
        if config.base_url.trim().is_empty() {
            return Err(EstimateError::Configuration(
                "base URL must not be empty".to_string(),
            ));
        }
        if config.timeout_secs == 0 {
            return Err(EstimateError::Configuration(
                "timeout must be greater than 0".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EstimateError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Full URL of the estimate endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{ESTIMATE_PATH}", self.base_url)
    }

    fn transport_error(&self, err: &reqwest::Error, url: &str) -> EstimateError {
        if err.is_timeout() {
            EstimateError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            EstimateError::NetworkUnavailable {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    /// Price every ride type between two addresses.
    #[instrument(skip(self))]
    pub async fn price_rides(
        &self,
        pickup: &str,
        dropoff: &str,
    ) -> Result<EstimateResponse, EstimateError> {
        let url = self.endpoint();
        let body = EstimateRequest {
            pickup_address: pickup,
            drop_address: dropoff,
        };

        debug!(%url, "Requesting e-hailing estimate");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(&e, &url))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(status, &body);
            warn!(status = status.as_u16(), %message, "E-hailing estimator returned an error");
            return Err(EstimateError::Upstream {
                status: status.as_u16(),
                message,
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e, &url))?;

        serde_json::from_str(&body).map_err(|e| EstimateError::MalformedResponse(e.to_string()))
    }
}

impl EstimateSource for EHailingClient {
    async fn estimate(&self, query: &TripQuery) -> Result<EstimateResponse, EstimateError> {
        self.price_rides(query.start(), query.end()).await
    }
}

/// Error message for a non-2xx reply: the string `detail` if present.
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            format!(
                "Request failed: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            )
            .trim_end()
            .to_string()
        })
}
