//! The trip lookup pipeline: validate, fetch, check, summarize.

use tracing::{debug, instrument};

use crate::domain::TripQuery;
use crate::myciti::{TripError, TripResponse, TripSource};

use super::config::FormatterConfig;
use super::summary::{TripSummary, summarize};

/// Looks up trips and formats them for display.
///
/// Stateless apart from its configuration: every call validates, fetches
/// and formats from scratch, so one service can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct TripService<S> {
    source: S,
    config: FormatterConfig,
}

impl<S: TripSource> TripService<S> {
    /// Create a service with default estimate constants.
    pub fn new(source: S) -> Self {
        Self::with_config(source, FormatterConfig::default())
    }

    pub fn with_config(source: S, config: FormatterConfig) -> Self {
        Self { source, config }
    }

    /// Look up the MyCiTi trip between two free-text locations.
    ///
    /// Fails with `InvalidInput` before any I/O if the locations are empty
    /// or the same; otherwise with whatever the source or the shape check
    /// reports.
    #[instrument(skip(self))]
    pub async fn get_trip(&self, start: &str, end: &str) -> Result<TripSummary, TripError> {
        let query = TripQuery::new(start, end)?;
        let raw = self.source.fetch_trip(&query).await?;
        let response = TripResponse::from_value(raw)?;
        let summary = summarize(&response, &self.config);

        debug!(
            distance = %summary.summary.distance,
            fare = %summary.summary.fare,
            duration = %summary.summary.duration,
            efficiency = summary.comparison.efficiency.value(),
            "Trip formatted"
        );

        Ok(summary)
    }
}
