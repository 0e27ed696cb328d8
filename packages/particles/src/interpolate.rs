use crate::{Point, Rgba};

/// A value that can be linearly interpolated, for use in a [`Gradient`][crate::Gradient].
pub trait Interpolate: Clone {
    /// Interpolates between `self` (at factor 0) and `other` (at factor 1).
    ///
    /// Factors outside `0.0..=1.0` extrapolate along the same line.
    #[must_use]
    fn lerp(&self, other: &Self, factor: f64) -> Self;
}

/// Linearly interpolates between two scalars as `(1 - factor) * min + factor * max`.
/// Returns exactly `max` at factor 1.
#[must_use]
pub fn lerp(min: f64, max: f64, factor: f64) -> f64 {
    (1.0 - factor) * min + factor * max
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, factor: f64) -> Self {
        lerp(*self, *other, factor)
    }
}

impl Interpolate for Point {
    fn lerp(&self, other: &Self, factor: f64) -> Self {
        Self::new(lerp(self.x, other.x, factor), lerp(self.y, other.y, factor))
    }
}

impl Interpolate for Rgba {
    fn lerp(&self, other: &Self, factor: f64) -> Self {
        Self::new(
            lerp(self.red, other.red, factor),
            lerp(self.green, other.green, factor),
            lerp(self.blue, other.blue, factor),
            lerp(self.alpha, other.alpha, factor),
        )
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
    fn scalar_endpoints_are_exact() {
        assert_eq!(lerp(0.1, 0.7, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
        assert_eq!(Interpolate::lerp(&2.0, &4.0, 0.5), 3.0);
    }

    #[test]
    fn color_interpolates_each_channel() {
        let from = Rgba::new(0.0, 1.0, 0.5, 1.0);
        let to = Rgba::new(1.0, 0.0, 0.5, 0.0);

        assert_eq!(from.lerp(&to, 0.5), Rgba::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn point_interpolates_each_axis() {
        let from = Point::new(0.0, 10.0);
        let to = Point::new(4.0, 20.0);

        assert_eq!(from.lerp(&to, 0.25), Point::new(1.0, 12.5));
    }
}
