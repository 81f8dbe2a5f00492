//! MyCiTi nearest-stops HTTP client.
//!
//! Sends one GET per trip lookup and sorts failures into three buckets:
//! the backend was unreachable, it answered with an error status, or it
//! answered with something we cannot read.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::domain::TripQuery;

use super::error::{INVALID_RESPONSE_MESSAGE, TripError};

/// Default base URL: the backend's local development address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MYCITI_API_URL";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the nearest-stops endpoint, relative to the base URL.
const NEAREST_STOPS_PATH: &str = "nearest-stops/";

/// Anything that can answer a nearest-stops query with a raw JSON body.
///
/// The body is returned unvalidated; shape checks happen in
/// [`TripResponse::from_value`](super::TripResponse::from_value).
pub trait TripSource: Send + Sync {
    fn fetch_trip(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<Value, TripError>> + Send;
}

/// Configuration for the MyCiTi client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyCitiConfig {
    /// Base URL of the backend (without the endpoint path)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MyCitiConfig {
    /// Create a config pointing at the local development backend.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a config from `MYCITI_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new().with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MyCitiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the MyCiTi nearest-stops backend.
///
/// Holds no per-request state; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct MyCitiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl MyCitiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MyCitiConfig) -> Result<Self, TripError> {
        if config.base_url.trim().is_empty() {
            return Err(TripError::Configuration(
                "base URL must not be empty".to_string(),
            ));
        }
        if config.timeout_secs == 0 {
            return Err(TripError::Configuration(
                "timeout must be greater than 0".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TripError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Full URL of the nearest-stops endpoint (without query string).
    pub fn endpoint(&self) -> String {
        format!("{}/{NEAREST_STOPS_PATH}", self.base_url)
    }

    /// Classify a transport-level failure.
    fn transport_error(&self, err: &reqwest::Error, url: &str) -> TripError {
        if err.is_timeout() {
            TripError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            TripError::NetworkUnavailable {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    /// Query the nearest-stops endpoint for a validated trip.
    ///
    /// Returns the decoded JSON body without checking its shape.
    #[instrument(skip(self, query), fields(start = %query.start(), end = %query.end()))]
    pub async fn nearest_stops(&self, query: &TripQuery) -> Result<Value, TripError> {
        let endpoint = self.endpoint();
        let request = self
            .http
            .get(&endpoint)
            .query(&[("start", query.start()), ("end", query.end())])
            .build()
            .map_err(|e| {
                TripError::Configuration(format!("invalid request URL {endpoint}: {e}"))
            })?;
        let url = request.url().to_string();

        debug!(%url, "Requesting nearest stops");

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(error = %e, "MyCiTi service unreachable");
            self.transport_error(&e, &url)
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(status, &body);
            warn!(status = status.as_u16(), %message, "MyCiTi service returned an error");
            return Err(TripError::Upstream {
                status: status.as_u16(),
                message,
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e, &url))?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            debug!(error = %e, body = %preview, "Unparseable response body");
            TripError::MalformedResponse(format!("{INVALID_RESPONSE_MESSAGE}: {e}"))
        })
    }
}

impl TripSource for MyCitiClient {
    async fn fetch_trip(&self, query: &TripQuery) -> Result<Value, TripError> {
        self.nearest_stops(query).await
    }
}

/// Error message for a non-2xx reply.
///
/// Uses the backend's `{"error": "..."}` body when present, otherwise
/// `"Request failed: <status> <reason>"`.
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MyCitiConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config, MyCitiConfig::default());
    }

    #[test]
    fn config_builder() {
        let config = MyCitiConfig::new()
            .with_base_url("http://myciti.internal:9000")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://myciti.internal:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = MyCitiClient::new(MyCitiConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn rejects_bad_config() {
        let err = MyCitiClient::new(MyCitiConfig::new().with_base_url("  ")).unwrap_err();
        assert!(matches!(err, TripError::Configuration(_)));

        let err = MyCitiClient::new(MyCitiConfig::new().with_timeout(0)).unwrap_err();
        assert!(matches!(err, TripError::Configuration(_)));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client =
            MyCitiClient::new(MyCitiConfig::new().with_base_url("http://localhost:8000/"))
                .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/nearest-stops/");
    }

    #[test]
    fn upstream_message_prefers_error_field() {
        let msg = upstream_message(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Could not geocode start address: Nowhere"}"#,
        );
        assert_eq!(msg, "Could not geocode start address: Nowhere");
    }

    #[test]
    fn upstream_message_falls_back_to_status() {
        assert_eq!(
            upstream_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "Request failed: 500 Internal Server Error"
        );
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, r#"{"detail": "nope"}"#),
            "Request failed: 502 Bad Gateway"
        );
        assert_eq!(
            upstream_message(StatusCode::BAD_REQUEST, r#"{"error": ""}"#),
            "Request failed: 400 Bad Request"
        );
    }

    #[test]
    fn upstream_message_unknown_status() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(upstream_message(status, ""), "Request failed: 599");
    }
}
