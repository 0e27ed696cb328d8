use std::any::type_name;

use crate::{Error, Interpolate, Result};

/// A list of values at locations (typically between 0 and 1), interpolated linearly between
/// neighbouring locations.
///
/// Lookups before the first location return the first value and lookups after the last
/// location return the last value.
///
/// # Example
///
/// ```rust
/// use particles::Gradient;
///
/// let mut size = Gradient::new();
/// size.add(0.0, 1.0);
/// size.add(1.0, 3.0);
///
/// assert_eq!(size.value_at(0.5), 2.0);
/// assert_eq!(size.value_at(-1.0), 1.0);
/// assert_eq!(size.value_at(7.0), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient<T> {
    /// Sorted ascending by location, with no two stops at the same location.
    stops: Vec<GradientStop<T>>,
}

/// One value of a [`Gradient`] and the location at which it applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop<T> {
    location: f64,
    value: T,
}

impl<T> GradientStop<T> {
    /// The location of the stop within the gradient.
    #[must_use]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// The value at this stop.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Interpolate> Gradient<T> {
    /// Creates a gradient without any stops.
    ///
    /// At least one stop must be added before [`value_at()`][Self::value_at] may be called.
    #[must_use]
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Creates a gradient going from `first` at location 0 to `last` at location 1.
    #[must_use]
    pub fn with_endpoints(first: T, last: T) -> Self {
        let mut gradient = Self::new();
        gradient.add(0.0, first);
        gradient.add(1.0, last);
        gradient
    }

    /// The number of stops in the gradient.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the gradient has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stops of the gradient, in ascending order of location.
    #[must_use]
    pub fn stops(&self) -> impl ExactSizeIterator<Item = &GradientStop<T>> {
        self.stops.iter()
    }

    /// Adds a value at the specified location, replacing any value already at that location.
    ///
    /// # Panics
    ///
    /// Panics if `location` is not finite. Use [`try_add()`][Self::try_add] to validate
    /// untrusted locations.
    #[expect(
        clippy::float_cmp,
        reason = "an exact match is what identifies the stop to replace"
    )]
    pub fn add(&mut self, location: f64, value: T) {
        assert!(
            location.is_finite(),
            "gradient location {location} is not finite in gradient of {}",
            type_name::<T>()
        );

        let index = self.stops.partition_point(|stop| stop.location < location);

        match self.stops.get_mut(index) {
            Some(stop) if stop.location == location => stop.value = value,
            _ => self.stops.insert(index, GradientStop { location, value }),
        }
    }

    /// Adds a value at the specified location, replacing any value already at that location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGradientLocation`] if `location` is not finite, leaving the
    /// gradient unchanged.
    pub fn try_add(&mut self, location: f64, value: T) -> Result<()> {
        if !location.is_finite() {
            return Err(Error::InvalidGradientLocation { location });
        }

        self.add(location, value);
        Ok(())
    }

    /// Removes all stops.
    pub fn remove_all(&mut self) {
        self.stops.clear();
    }

    /// Returns the value at the specified location, interpolating between the two stops that
    /// surround it.
    ///
    /// # Panics
    ///
    /// Panics if the gradient has no stops.
    #[must_use]
    pub fn value_at(&self, location: f64) -> T {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            panic!(
                "value_at({location}) called on an empty gradient of {}",
                type_name::<T>()
            );
        };

        if location < first.location {
            return first.value.clone();
        }

        if location >= last.location {
            return last.value.clone();
        }

        // The first stop strictly after the location. The checks above mean there is one.
        let next_index = self.stops.partition_point(|stop| stop.location <= location);
        let next = self.stops.get(next_index).unwrap_or(last);

        let Some(previous) = next_index
            .checked_sub(1)
            .and_then(|index| self.stops.get(index))
        else {
            // Only reachable for NaN, which is neither before nor after any stop.
            return next.value.clone();
        };

        let factor = (location - previous.location) / (next.location - previous.location);

        previous.value.lerp(&next.value, factor)
    }
}

impl<T: Interpolate> Default for Gradient<T> {
    fn default() -> Self {
        Self::new()
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
    use crate::Rgba;

    #[test]
    fn flat_gradient_is_flat() {
        let gradient = Gradient::with_endpoints(1.0, 1.0);

        for step in 0..=10 {
            assert_eq!(gradient.value_at(f64::from(step) / 10.0), 1.0);
        }
    }

    #[test]
    fn midpoint_is_interpolated() {
        let gradient = Gradient::with_endpoints(2.0, 6.0);

        assert_eq!(gradient.value_at(0.5), 4.0);
        assert_eq!(gradient.value_at(0.25), 3.0);
    }

    #[test]
    fn clamps_outside_range() {
        let gradient = Gradient::with_endpoints(Rgba::RED, Rgba::YELLOW);

        assert_eq!(gradient.value_at(-0.5), Rgba::RED);
        assert_eq!(gradient.value_at(0.0), Rgba::RED);
        assert_eq!(gradient.value_at(1.0), Rgba::YELLOW);
        assert_eq!(gradient.value_at(1.5), Rgba::YELLOW);
    }

    #[test]
    fn color_midpoint() {
        let gradient = Gradient::with_endpoints(Rgba::RED, Rgba::YELLOW);

        assert_eq!(gradient.value_at(0.5), Rgba::new(1.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn stops_are_kept_sorted() {
        let mut gradient = Gradient::new();
        gradient.add(0.8, 8.0);
        gradient.add(0.2, 2.0);
        gradient.add(0.5, 5.0);

        let locations: Vec<f64> = gradient.stops().map(GradientStop::location).collect();
        assert_eq!(locations, vec![0.2, 0.5, 0.8]);
    }

    #[test]
    fn add_at_existing_location_replaces() {
        let mut gradient = Gradient::with_endpoints(0.0, 1.0);
        gradient.add(1.0, 10.0);

        assert_eq!(gradient.len(), 2);
        assert_eq!(gradient.value_at(1.0), 10.0);
        assert_eq!(gradient.value_at(0.5), 5.0);
    }

    #[test]
    fn picks_bracketing_stops() {
        let mut gradient = Gradient::new();
        gradient.add(0.0, 0.0);
        gradient.add(0.5, 10.0);
        gradient.add(1.0, 0.0);

        assert_eq!(gradient.value_at(0.25), 5.0);
        assert_eq!(gradient.value_at(0.5), 10.0);
        assert_eq!(gradient.value_at(0.75), 5.0);
    }

    #[test]
    fn single_stop_is_constant() {
        let mut gradient = Gradient::new();
        gradient.add(0.3, 7.0);

        assert_eq!(gradient.value_at(0.0), 7.0);
        assert_eq!(gradient.value_at(0.3), 7.0);
        assert_eq!(gradient.value_at(1.0), 7.0);
    }

    #[test]
    fn nan_location_returns_first_value() {
        let gradient = Gradient::with_endpoints(3.0, 9.0);

        assert_eq!(gradient.value_at(f64::NAN), 3.0);
    }

    #[test]
    fn remove_all_empties() {
        let mut gradient = Gradient::with_endpoints(0.0, 1.0);
        gradient.remove_all();

        assert!(gradient.is_empty());
    }

    #[test]
    fn try_add_rejects_non_finite_location() {
        let mut gradient = Gradient::new();

        let result = gradient.try_add(f64::INFINITY, 1.0);

        assert!(matches!(
            result,
            Err(Error::InvalidGradientLocation { location }) if location.is_infinite()
        ));
        assert!(gradient.is_empty());

        gradient.try_add(0.5, 1.0).unwrap();
        assert_eq!(gradient.len(), 1);
    }

    #[test]
    #[should_panic]
    fn empty_gradient_lookup_panics() {
        _ = Gradient::<f64>::new().value_at(0.5);
    }

    #[test]
    #[should_panic]
    fn non_finite_location_panics() {
        Gradient::new().add(f64::NAN, 1.0);
    }
}
