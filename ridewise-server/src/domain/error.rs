//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are caller-fixable and distinct from backend/IO errors.

use super::LocationField;

/// Validation errors for a trip query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A location was empty or whitespace-only
    #[error("{0} location is required and must be a non-empty string")]
    MissingLocation(LocationField),

    /// Start and end name the same place (ignoring case and surrounding whitespace)
    #[error("Start and end locations cannot be the same")]
    SameLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QueryError::MissingLocation(LocationField::Start);
        assert_eq!(
            err.to_string(),
            "Start location is required and must be a non-empty string"
        );

        let err = QueryError::MissingLocation(LocationField::End);
        assert_eq!(
            err.to_string(),
            "End location is required and must be a non-empty string"
        );

        let err = QueryError::SameLocation;
        assert_eq!(err.to_string(), "Start and end locations cannot be the same");
    }
}
