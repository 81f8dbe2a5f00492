//! Domain types for the trip comparison service.
//!
//! This module contains validated value types. All types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod duration;
mod efficiency;
mod error;
mod money;
mod query;
mod walking;

pub use duration::TripDuration;
pub use efficiency::EfficiencyScore;
pub use error::QueryError;
pub use money::Rands;
pub use query::{LocationField, TripQuery, truncate_address};
pub use walking::WalkingDistance;
