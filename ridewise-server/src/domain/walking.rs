//! Walking distance between an address and its nearest stop.

use std::fmt;

/// A non-negative walking distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct WalkingDistance(f64);

impl WalkingDistance {
    /// Create from meters. Negative and non-finite values become zero.
    pub fn from_meters(meters: f64) -> Self {
        if meters.is_finite() && meters > 0.0 {
            WalkingDistance(meters)
        } else {
            WalkingDistance(0.0)
        }
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Distance rounded to the nearest meter.
    pub fn rounded_meters(&self) -> u64 {
        self.0.round() as u64
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Minutes needed to walk this distance at `speed_mps`, rounded up.
    pub fn walking_minutes(&self, speed_mps: f64) -> u32 {
        if speed_mps <= 0.0 {
            return 0;
        }
        (self.0 / speed_mps / 60.0).ceil() as u32
    }
}

impl std::ops::Add for WalkingDistance {
    type Output = WalkingDistance;

    fn add(self, rhs: WalkingDistance) -> WalkingDistance {
        WalkingDistance(self.0 + rhs.0)
    }
}

impl fmt::Display for WalkingDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.rounded_meters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_meter() {
        assert_eq!(WalkingDistance::from_meters(199.6).rounded_meters(), 200);
        assert_eq!(WalkingDistance::from_meters(199.4).to_string(), "199m");
    }

    #[test]
    fn clamps_invalid_values() {
        assert_eq!(WalkingDistance::from_meters(-5.0).meters(), 0.0);
        assert_eq!(WalkingDistance::from_meters(f64::NAN).meters(), 0.0);
        assert_eq!(WalkingDistance::from_meters(f64::INFINITY).meters(), 0.0);
    }

    #[test]
    fn walking_minutes_round_up() {
        // 200 / 1.4 = 142.9s = 2.38min
        assert_eq!(WalkingDistance::from_meters(200.0).walking_minutes(1.4), 3);
        // 300 / 1.4 = 214.3s = 3.57min
        assert_eq!(WalkingDistance::from_meters(300.0).walking_minutes(1.4), 4);
        assert_eq!(WalkingDistance::from_meters(1000.0).walking_minutes(1.4), 12);
        assert_eq!(WalkingDistance::from_meters(0.0).walking_minutes(1.4), 0);
    }

    #[test]
    fn sums_legs() {
        let total = WalkingDistance::from_meters(200.0) + WalkingDistance::from_meters(300.0);
        assert_eq!(total.rounded_meters(), 500);
        assert_eq!(total.kilometers(), 0.5);
    }
}
