//! Trip lookup error types.

use crate::domain::QueryError;

/// Message reported when the backend cannot be reached at all.
pub const CONNECTION_MESSAGE: &str =
    "Error connecting to MyCiTi service. Please check the service URL.";

/// Message reported when the backend's reply is not a JSON object.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from MyCiTi service";

/// Broad category of a [`TripError`], for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripErrorKind {
    InvalidInput,
    NetworkUnavailable,
    Timeout,
    Upstream,
    MalformedResponse,
    Configuration,
}

/// Errors that can occur while looking up and formatting a trip.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    /// The start/end locations failed validation
    #[error(transparent)]
    InvalidInput(#[from] QueryError),

    /// The backend could not be reached (connection refused, DNS failure, ...)
    #[error("{}", CONNECTION_MESSAGE)]
    NetworkUnavailable { url: String, reason: String },

    /// The backend did not answer within the configured timeout
    #[error("Request to MyCiTi service timed out after {timeout_secs}s (URL: {url})")]
    Timeout { url: String, timeout_secs: u64 },

    /// The backend answered with a non-2xx status
    #[error("{message} (URL: {url})")]
    Upstream {
        status: u16,
        message: String,
        url: String,
    },

    /// The backend answered 2xx with a body we cannot use
    #[error("{0}")]
    MalformedResponse(String),

    /// The client could not be set up
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TripError {
    /// A response that is missing one of the required top-level fields.
    pub fn missing_field(field: &str) -> Self {
        TripError::MalformedResponse(format!("Missing required field in response: {field}"))
    }

    /// A response that is not a JSON object.
    pub fn invalid_response() -> Self {
        TripError::MalformedResponse(INVALID_RESPONSE_MESSAGE.to_string())
    }

    pub fn kind(&self) -> TripErrorKind {
        match self {
            TripError::InvalidInput(_) => TripErrorKind::InvalidInput,
            TripError::NetworkUnavailable { .. } => TripErrorKind::NetworkUnavailable,
            TripError::Timeout { .. } => TripErrorKind::Timeout,
            TripError::Upstream { .. } => TripErrorKind::Upstream,
            TripError::MalformedResponse(_) => TripErrorKind::MalformedResponse,
            TripError::Configuration(_) => TripErrorKind::Configuration,
        }
    }

    /// Whether asking again later might succeed.
    ///
    /// Nothing in this crate retries; this is a hint for the user-facing layer.
    pub fn is_retryable(&self) -> bool {
        match self {
            TripError::NetworkUnavailable { .. } | TripError::Timeout { .. } => true,
            TripError::Upstream { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationField;

    #[test]
    fn error_display() {
        let err = TripError::from(QueryError::SameLocation);
        assert_eq!(err.to_string(), "Start and end locations cannot be the same");

        let err = TripError::NetworkUnavailable {
            url: "http://localhost:1/nearest-stops/".into(),
            reason: "connection refused".into(),
        };
        assert_eq!(err.to_string(), CONNECTION_MESSAGE);

        let err = TripError::Upstream {
            status: 400,
            message: "Could not geocode start address: Nowhere".into(),
            url: "http://localhost:8000/nearest-stops/?start=Nowhere&end=Sea+Point".into(),
        };
        assert_eq!(
            err.to_string(),
            "Could not geocode start address: Nowhere \
             (URL: http://localhost:8000/nearest-stops/?start=Nowhere&end=Sea+Point)"
        );

        let err = TripError::missing_field("fare_rands");
        assert_eq!(
            err.to_string(),
            "Missing required field in response: fare_rands"
        );

        let err = TripError::Timeout {
            url: "http://localhost:8000/nearest-stops/".into(),
            timeout_secs: 5,
        };
        assert!(err.to_string().contains("timed out after 5s"));
    }

    #[test]
    fn kinds() {
        assert_eq!(
            TripError::from(QueryError::MissingLocation(LocationField::End)).kind(),
            TripErrorKind::InvalidInput
        );
        assert_eq!(
            TripError::invalid_response().kind(),
            TripErrorKind::MalformedResponse
        );
        assert_eq!(
            TripError::Configuration("bad".into()).kind(),
            TripErrorKind::Configuration
        );
    }

    #[test]
    fn retryable_errors() {
        assert!(
            TripError::NetworkUnavailable {
                url: String::new(),
                reason: String::new()
            }
            .is_retryable()
        );
        assert!(
            TripError::Timeout {
                url: String::new(),
                timeout_secs: 30
            }
            .is_retryable()
        );
        assert!(
            TripError::Upstream {
                status: 503,
                message: String::new(),
                url: String::new()
            }
            .is_retryable()
        );
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!TripError::from(QueryError::SameLocation).is_retryable());
        assert!(!TripError::missing_field("start").is_retryable());
        assert!(
            !TripError::Upstream {
                status: 400,
                message: String::new(),
                url: String::new()
            }
            .is_retryable()
        );
    }
}
