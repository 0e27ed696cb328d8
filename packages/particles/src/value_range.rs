use rand::Rng;

use crate::{Angle, Point};

/// A value described by an origin and a spread, covering `origin - spread / 2` to
/// `origin + spread / 2`.
///
/// Emission properties of a [`ParticleSystem`][crate::ParticleSystem] are value ranges, so
/// every emitted particle can receive a slightly different value.
///
/// # Example
///
/// ```rust
/// use particles::ValueRange;
///
/// let speed = ValueRange::new(10.0, 4.0);
///
/// assert_eq!(speed.min(), 8.0);
/// assert_eq!(speed.max(), 12.0);
///
/// let sample = speed.sample(&mut rand::rng());
/// assert!((8.0..=12.0).contains(&sample));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ValueRange<T> {
    origin: T,
    spread: T,
}

impl<T: Sample> ValueRange<T> {
    /// Creates a range centered on `origin` that is `spread` wide.
    #[must_use]
    pub const fn new(origin: T, spread: T) -> Self {
        Self { origin, spread }
    }

    /// Creates a range that always yields `value`.
    #[must_use]
    pub fn fixed(value: T) -> Self {
        Self::new(value, T::ZERO)
    }

    /// The center of the range.
    #[must_use]
    pub fn origin(&self) -> T {
        self.origin
    }

    /// The width of the range.
    #[must_use]
    pub fn spread(&self) -> T {
        self.spread
    }

    /// The lowest value the range can yield.
    #[must_use]
    pub fn min(&self) -> T {
        T::at(self.origin, self.spread, 0.0)
    }

    /// The highest value the range can yield.
    #[must_use]
    pub fn max(&self) -> T {
        T::at(self.origin, self.spread, 1.0)
    }

    /// Draws a value uniformly from the range.
    ///
    /// A range with zero spread yields exactly its origin and does not consume any randomness.
    #[must_use]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        T::sample(self.origin, self.spread, rng)
    }

    /// Whether the spread is usable: finite and not negative.
    #[must_use]
    pub fn has_valid_spread(&self) -> bool {
        T::is_valid_spread(self.spread)
    }
}

/// A type that can be used in a [`ValueRange`].
///
/// Implemented for scalars (`f64`), tick counts (`u32`), [`Angle`] and [`Point`].
pub trait Sample: Copy {
    /// The value of a zero spread.
    const ZERO: Self;

    /// The value at `position` along the range, where 0 is the minimum and 1 is the maximum.
    #[must_use]
    fn at(origin: Self, spread: Self, position: f64) -> Self;

    /// Draws a value uniformly from the range.
    #[must_use]
    fn sample<R: Rng>(origin: Self, spread: Self, rng: &mut R) -> Self;

    /// Whether `spread` is finite and not negative.
    #[must_use]
    fn is_valid_spread(spread: Self) -> bool;
}

/// Offset from the origin at `position` along a range of width `spread`.
fn offset(spread: f64, position: f64) -> f64 {
    spread * position - spread / 2.0
}

/// Draws an offset from `-spread / 2..=spread / 2`, or exactly zero for a zero spread.
fn random_offset<R: Rng>(spread: f64, rng: &mut R) -> f64 {
    if spread == 0.0 {
        return 0.0;
    }

    offset(spread, rng.random_range(0.0..=1.0))
}

fn is_valid_scalar_spread(spread: f64) -> bool {
    spread.is_finite() && spread >= 0.0
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    fn at(origin: Self, spread: Self, position: f64) -> Self {
        origin + offset(spread, position)
    }

    fn sample<R: Rng>(origin: Self, spread: Self, rng: &mut R) -> Self {
        origin + random_offset(spread, rng)
    }

    fn is_valid_spread(spread: Self) -> bool {
        is_valid_scalar_spread(spread)
    }
}

/// Tick counts are computed as real numbers and then truncated toward zero, saturating at the
/// bounds of `u32`.
impl Sample for u32 {
    const ZERO: Self = 0;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "truncation toward zero, saturating at the type bounds, is the rounding rule"
    )]
    fn at(origin: Self, spread: Self, position: f64) -> Self {
        (f64::from(origin) + offset(f64::from(spread), position)) as Self
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "truncation toward zero, saturating at the type bounds, is the rounding rule"
    )]
    fn sample<R: Rng>(origin: Self, spread: Self, rng: &mut R) -> Self {
        if spread == 0 {
            return origin;
        }

        (f64::from(origin) + random_offset(f64::from(spread), rng)) as Self
    }

    fn is_valid_spread(_spread: Self) -> bool {
        true
    }
}

impl Sample for Angle {
    const ZERO: Self = Self::ZERO;

    fn at(origin: Self, spread: Self, position: f64) -> Self {
        Self::from_radians(f64::at(origin.radians(), spread.radians(), position))
    }

    fn sample<R: Rng>(origin: Self, spread: Self, rng: &mut R) -> Self {
        Self::from_radians(f64::sample(origin.radians(), spread.radians(), rng))
    }

    fn is_valid_spread(spread: Self) -> bool {
        is_valid_scalar_spread(spread.radians())
    }
}

/// Each axis is sampled independently.
impl Sample for Point {
    const ZERO: Self = Self::ZERO;

    fn at(origin: Self, spread: Self, position: f64) -> Self {
        Self::new(
            f64::at(origin.x, spread.x, position),
            f64::at(origin.y, spread.y, position),
        )
    }

    fn sample<R: Rng>(origin: Self, spread: Self, rng: &mut R) -> Self {
        Self::new(
            f64::sample(origin.x, spread.x, rng),
            f64::sample(origin.y, spread.y, rng),
        )
    }

    fn is_valid_spread(spread: Self) -> bool {
        is_valid_scalar_spread(spread.x) && is_valid_scalar_spread(spread.y)
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
    use std::iter;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(ValueRange<u32>: Eq, Copy);
    assert_impl_all!(ValueRange<f64>: PartialEq, Copy);

    #[test]
    fn integer_bounds_truncate() {
        let range = ValueRange::<u32>::new(10, 5);

        assert_eq!(range.min(), 7);
        assert_eq!(range.max(), 12);
    }

    #[test]
    fn integer_bounds_saturate_at_zero() {
        let range = ValueRange::<u32>::new(1, 10);

        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 6);
    }

    #[test]
    fn float_bounds() {
        let range = ValueRange::new(10.2, 5.6);

        assert!((range.min() - 7.4).abs() < 0.01);
        assert!((range.max() - 13.0).abs() < 0.01);
    }

    #[test]
    fn point_bounds() {
        let range = ValueRange::new(Point::new(5.0, 10.0), Point::new(2.0, 3.0));

        assert_eq!(range.min(), Point::new(4.0, 8.5));
        assert_eq!(range.max(), Point::new(6.0, 11.5));
    }

    #[test]
    fn angle_bounds() {
        let range = ValueRange::new(Angle::from_radians(3.0), Angle::from_radians(1.0));

        assert_eq!(range.min(), Angle::from_radians(2.5));
        assert_eq!(range.max(), Angle::from_radians(3.5));
    }

    #[test]
    fn zero_spread_yields_origin_exactly() {
        let mut rng = SmallRng::seed_from_u64(1);

        let scalar = ValueRange::fixed(0.1 + 0.2);
        let ticks = ValueRange::fixed(60_u32);
        let angle = ValueRange::fixed(Angle::from_degrees(33.0));
        let point = ValueRange::fixed(Point::new(-3.3, 1e9));

        for _ in 0..100 {
            assert_eq!(scalar.sample(&mut rng), 0.1 + 0.2);
            assert_eq!(ticks.sample(&mut rng), 60);
            assert_eq!(angle.sample(&mut rng), Angle::from_degrees(33.0));
            assert_eq!(point.sample(&mut rng), Point::new(-3.3, 1e9));
        }
    }

    #[test]
    fn zero_spread_does_not_consume_randomness() {
        let mut used = SmallRng::seed_from_u64(7);
        let mut untouched = SmallRng::seed_from_u64(7);

        _ = ValueRange::fixed(5.0).sample(&mut used);

        assert_eq!(used.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn samples_stay_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);

        let scalar = ValueRange::new(-4.0, 3.0);
        let ticks = ValueRange::<u32>::new(100, 21);
        let point = ValueRange::new(Point::new(0.0, 50.0), Point::new(10.0, 0.5));

        for _ in 0..1_000 {
            let value = scalar.sample(&mut rng);
            assert!((scalar.min()..=scalar.max()).contains(&value));

            let value = ticks.sample(&mut rng);
            assert!((ticks.min()..=ticks.max()).contains(&value));

            let value = point.sample(&mut rng);
            assert!((point.min().x..=point.max().x).contains(&value.x));
            assert!((point.min().y..=point.max().y).contains(&value.y));
        }
    }

    #[test]
    fn point_axes_are_independent() {
        let mut rng = SmallRng::seed_from_u64(3);
        let range = ValueRange::new(Point::ZERO, Point::new(2.0, 2.0));

        let differing = iter::repeat_with(|| range.sample(&mut rng))
            .take(100)
            .filter(|point| point.x != point.y)
            .count();

        assert!(differing > 90);
    }

    #[test]
    fn spread_validity() {
        assert!(ValueRange::new(1.0, 0.0).has_valid_spread());
        assert!(!ValueRange::new(1.0, -0.5).has_valid_spread());
        assert!(!ValueRange::new(1.0, f64::NAN).has_valid_spread());
        assert!(
            !ValueRange::new(Point::ZERO, Point::new(1.0, f64::INFINITY)).has_valid_spread()
        );
        assert!(!ValueRange::new(Angle::ZERO, Angle::from_radians(-1.0)).has_valid_spread());
        assert!(ValueRange::<u32>::new(0, 1_000).has_valid_spread());
    }
}
