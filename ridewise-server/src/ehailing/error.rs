//! E-hailing estimator error types.

/// Errors from the e-hailing fare estimator.
///
/// None of these fail a trip lookup; the e-hailing card is shown empty
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The estimator could not be reached
    #[error("Error connecting to e-hailing estimator: {reason} (URL: {url})")]
    NetworkUnavailable { url: String, reason: String },

    /// The estimator did not answer within the configured timeout
    #[error("E-hailing estimate timed out after {timeout_secs}s (URL: {url})")]
    Timeout { url: String, timeout_secs: u64 },

    /// The estimator answered with a non-2xx status
    #[error("{message} (URL: {url})")]
    Upstream {
        status: u16,
        message: String,
        url: String,
    },

    /// The estimator answered 2xx with a body we cannot use
    #[error("Invalid response from e-hailing estimator: {0}")]
    MalformedResponse(String),

    /// The client could not be set up
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EstimateError::Upstream {
            status: 500,
            message: "Error getting travel data: ZERO_RESULTS".into(),
            url: "http://localhost:8001/estimate".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error getting travel data: ZERO_RESULTS (URL: http://localhost:8001/estimate)"
        );

        let err = EstimateError::MalformedResponse("missing field `rides`".into());
        assert_eq!(
            err.to_string(),
            "Invalid response from e-hailing estimator: missing field `rides`"
        );
    }
}
