//! Trip comparison formatter.
//!
//! Turns a raw nearest-stops response into a [`TripSummary`]: display
//! strings for the trip, a per-leg walking breakdown, and raw figures for
//! comparing against other ride options.
//!
//! All estimates are driven by [`FormatterConfig`]; the defaults reproduce
//! the figures users already see (18/25 km/h bus speeds, 8/12 minute waits,
//! 1.4 m/s walking).

mod config;
mod estimate;
mod service;
mod summary;

pub use config::{FormatterConfig, ScoringWeights};
pub use estimate::{efficiency_score, estimate_duration, walking_minutes};
pub use service::TripService;
pub use summary::{
    LegDetails, PROVIDER, RideDetails, TRANSPORT_TYPE, TripComparison, TripDetails, TripOverview,
    TripSummary, fare_type, summarize,
};
