use std::ops::{Div, DivAssign};

use derive_more::{Add, AddAssign, Sub, SubAssign};

/// A point or vector in 2D space.
#[derive(Add, AddAssign, Clone, Copy, Debug, Default, PartialEq, Sub, SubAssign)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a point is fully described by its two coordinates"
)]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f64,

    /// The vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
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
    fn arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);

        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(b / 2.0, Point::new(1.5, 2.5));

        let mut c = a;
        c += b;
        c -= Point::new(0.0, 1.0);
        c /= 4.0;
        assert_eq!(c, Point::new(1.0, 1.5));
    }
}
