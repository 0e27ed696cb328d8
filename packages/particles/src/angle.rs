use std::f64::consts::PI;

use derive_more::{Add, AddAssign, Sub, SubAssign};

/// An angle, stored in radians and convertible to and from degrees.
///
/// # Example
///
/// ```rust
/// use particles::Angle;
///
/// let right = Angle::from_degrees(90.0);
///
/// assert!((right.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!(((right + right).degrees() - 180.0).abs() < 1e-12);
/// ```
#[derive(Add, AddAssign, Clone, Copy, Debug, Default, PartialEq, PartialOrd, Sub, SubAssign)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// An angle of zero.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates an angle from a measure in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from a measure in degrees.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * (PI / 180.0),
        }
    }

    /// The angle in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// The angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians * (180.0 / PI)
    }
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use super::*;

    #[test]
    fn degrees_round_trip() {
        let angle = Angle::from_degrees(45.0);

        assert!((angle.radians() - PI / 4.0).abs() < 1e-12);
        assert!((angle.degrees() - 45.0).abs() < 1e-12);
    }

    #[test]
    fn addition_adds_radians() {
        let mut angle = Angle::from_radians(1.0) + Angle::from_radians(2.5);
        assert_eq!(angle, Angle::from_radians(3.5));

        angle += Angle::from_radians(-0.5);
        assert_eq!(angle, Angle::from_radians(3.0));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Angle::default(), Angle::ZERO);
    }
}
