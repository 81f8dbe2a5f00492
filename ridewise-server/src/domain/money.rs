//! South African rand amounts.

use std::fmt;

/// An amount in rands. Displays with two decimal places, e.g. `R13.50`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rands(pub f64);

impl Rands {
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Fare per kilometer, or zero for a non-positive distance.
    pub fn per_km(&self, distance_km: f64) -> Rands {
        if distance_km > 0.0 {
            Rands(self.0 / distance_km)
        } else {
            Rands(0.0)
        }
    }
}

impl fmt::Display for Rands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{:.2}", self.0)
    }
}
