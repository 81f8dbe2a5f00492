//! Ride option cards.
//!
//! Each card shows a transport option with an optional duration and cost.
//! The MyCiTi bus card comes from the trip lookup and the e-hailing card
//! from the cheapest estimator ride type. No backend prices train trips,
//! so that card never has an estimate.

use serde::Serialize;

use crate::ehailing::{EstimateResponse, RideEstimate};
use crate::formatter::TripSummary;

/// The transport options shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RideKind {
    Train,
    MyCitiBus,
    EHailing,
}

impl RideKind {
    /// Card order on the results page.
    pub const ALL: [RideKind; 3] = [RideKind::Train, RideKind::MyCitiBus, RideKind::EHailing];

    pub fn default_name(&self) -> &'static str {
        match self {
            RideKind::Train => "Train",
            RideKind::MyCitiBus => "MyCiTi Bus",
            RideKind::EHailing => "E-Hailing",
        }
    }

    /// CSS modifier used by the card template.
    pub fn css_class(&self) -> &'static str {
        match self {
            RideKind::Train => "train",
            RideKind::MyCitiBus => "bus",
            RideKind::EHailing => "ehailing",
        }
    }
}

/// One card: `{name, duration, cost}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideOption {
    pub kind: RideKind,
    pub name: String,
    pub duration: Option<String>,
    pub cost: Option<String>,
    /// Time until pickup, for rides that come to you
    pub wait: Option<String>,
}

impl RideOption {
    /// A card with the kind's default name and no estimates.
    pub fn new(kind: RideKind) -> Self {
        Self {
            kind,
            name: kind.default_name().to_string(),
            duration: None,
            cost: None,
            wait: None,
        }
    }

    pub fn with_estimate(mut self, duration: impl Into<String>, cost: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self.cost = Some(cost.into());
        self
    }

    pub fn with_wait(mut self, wait: impl Into<String>) -> Self {
        self.wait = Some(wait.into());
        self
    }

    pub fn has_estimate(&self) -> bool {
        self.duration.is_some() || self.cost.is_some()
    }

    /// Template helper: `css_class` of the kind.
    pub fn css_class(&self) -> &'static str {
        self.kind.css_class()
    }
}

/// Cards for a looked-up trip, in display order.
pub fn ride_options(trip: &TripSummary, ehailing: Option<&EstimateResponse>) -> Vec<RideOption> {
    RideKind::ALL
        .iter()
        .map(|&kind| match kind {
            RideKind::MyCitiBus => RideOption::new(kind)
                .with_estimate(trip.summary.duration.clone(), trip.summary.fare.clone()),
            RideKind::EHailing => ehailing
                .and_then(EstimateResponse::cheapest)
                .map_or_else(|| RideOption::new(kind), ehailing_card),
            RideKind::Train => RideOption::new(kind),
        })
        .collect()
}

/// E-hailing card for one priced ride type, e.g. "E-Hailing (UberX)".
fn ehailing_card(ride: &RideEstimate) -> RideOption {
    let mut card = RideOption::new(RideKind::EHailing)
        .with_estimate(ride.travel_time.clone(), ride.fare().to_string())
        .with_wait(ride.wait_time.clone());
    card.name = format!("{} ({})", card.name, ride.ride_type);
    card
}
