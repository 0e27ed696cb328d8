use rand::SeedableRng;
use rand::rngs::SmallRng;
use reuse_pool::ReusePool;
use tracing::debug;

use crate::system::default_gradients;
use crate::{EmissionProperties, Error, Gradient, ParticleSystem, Result, Rgba};

/// Number of particles when the capacity is not set.
const DEFAULT_CAPACITY: usize = 100;

/// Builder for creating an instance of [`ParticleSystem`].
///
/// Every setting is optional. Unlike [`ParticleSystem::new()`], building validates the
/// configuration and reports problems as an [`Error`] instead of panicking later.
///
/// # Examples
///
/// ```
/// use particles::{EmissionProperties, ParticleSystem, ValueRange};
///
/// let system = ParticleSystem::builder()
///     .capacity(256)
///     .properties(EmissionProperties {
///         lifetime: ValueRange::new(120, 40),
///         ..EmissionProperties::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(system.capacity(), 256);
/// ```
///
/// Invalid settings are rejected:
///
/// ```
/// use particles::{Error, ParticleSystem};
///
/// let result = ParticleSystem::builder().capacity(0).build();
///
/// assert!(matches!(result, Err(Error::ZeroCapacity)));
/// ```
#[derive(Debug)]
#[must_use]
pub struct ParticleSystemBuilder {
    capacity: usize,
    properties: EmissionProperties,
    color_gradient: Gradient<Rgba>,
    size_gradient: Gradient<f64>,

    // If `None`, the generator is seeded from the thread-local generator.
    seed: Option<u64>,
}

impl ParticleSystemBuilder {
    pub(crate) fn new() -> Self {
        let (color_gradient, size_gradient) = default_gradients();

        Self {
            capacity: DEFAULT_CAPACITY,
            properties: EmissionProperties::default(),
            color_gradient,
            size_gradient,
            seed: None,
        }
    }

    /// Sets the maximum number of particles that can be alive at the same time.
    ///
    /// Defaults to 100.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the properties that emitted particles are initialized from.
    pub fn properties(mut self, properties: EmissionProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Sets the color of particles over their lifetime.
    ///
    /// Defaults to red fading into yellow.
    pub fn color_gradient(mut self, gradient: Gradient<Rgba>) -> Self {
        self.color_gradient = gradient;
        self
    }

    /// Sets the size of particles over their lifetime.
    ///
    /// Defaults to a constant size of 1.
    pub fn size_gradient(mut self, gradient: Gradient<f64>) -> Self {
        self.size_gradient = gradient;
        self
    }

    /// Seeds the random number generator, making emission reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the particle system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if the capacity is zero, [`Error::InvalidSpread`] if an
    /// emission property cannot be sampled from and [`Error::EmptyGradient`] if either gradient
    /// has no stops.
    pub fn build(self) -> Result<ParticleSystem> {
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        self.properties.validate()?;

        if self.color_gradient.is_empty() {
            return Err(Error::EmptyGradient { gradient: "color" });
        }

        if self.size_gradient.is_empty() {
            return Err(Error::EmptyGradient { gradient: "size" });
        }

        let rng = self.seed.map_or_else(
            || SmallRng::from_rng(&mut rand::rng()),
            SmallRng::seed_from_u64,
        );

        debug!(
            capacity = self.capacity,
            seeded = self.seed.is_some(),
            "building particle system"
        );

        Ok(ParticleSystem::from_parts(
            ReusePool::with_default(self.capacity),
            self.properties,
            self.color_gradient,
            self.size_gradient,
            rng,
        ))
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
    use crate::{Angle, Point, ValueRange};

    #[test]
    fn defaults() {
        let system = ParticleSystemBuilder::new().build().unwrap();

        assert_eq!(system.capacity(), DEFAULT_CAPACITY);
        assert_eq!(system.properties(), &EmissionProperties::default());
        assert!(system.is_empty());
    }

    #[test]
    fn zero_capacity_is_error() {
        let result = ParticleSystemBuilder::new().capacity(0).build();

        assert!(matches!(result, Err(Error::ZeroCapacity)));
    }

    #[test]
    fn invalid_spread_is_error() {
        let result = ParticleSystemBuilder::new()
            .properties(EmissionProperties {
                linear_velocity_speed: ValueRange::new(1.0, -1.0),
                ..EmissionProperties::default()
            })
            .build();

        assert!(matches!(
            result,
            Err(Error::InvalidSpread {
                property: "linear_velocity_speed"
            })
        ));
    }

    #[test]
    fn empty_gradients_are_errors() {
        let result = ParticleSystemBuilder::new()
            .color_gradient(Gradient::new())
            .build();
        assert!(matches!(
            result,
            Err(Error::EmptyGradient { gradient: "color" })
        ));

        let result = ParticleSystemBuilder::new()
            .size_gradient(Gradient::new())
            .build();
        assert!(matches!(
            result,
            Err(Error::EmptyGradient { gradient: "size" })
        ));
    }

    #[test]
    fn capacity_is_checked_before_properties() {
        let result = ParticleSystemBuilder::new()
            .capacity(0)
            .properties(EmissionProperties {
                angle: ValueRange::new(Angle::ZERO, Angle::from_radians(f64::NAN)),
                ..EmissionProperties::default()
            })
            .build();

        assert!(matches!(result, Err(Error::ZeroCapacity)));
    }

    #[test]
    fn same_seed_emits_same_particles() {
        let properties = EmissionProperties {
            position: ValueRange::new(Point::ZERO, Point::new(100.0, 100.0)),
            lifetime: ValueRange::new(50, 20),
            linear_velocity_speed: ValueRange::new(3.0, 2.0),
            ..EmissionProperties::default()
        };

        let mut first = ParticleSystemBuilder::new()
            .properties(properties)
            .seed(5)
            .build()
            .unwrap();
        let mut second = ParticleSystemBuilder::new()
            .properties(properties)
            .seed(5)
            .build()
            .unwrap();

        for _ in 0..20 {
            let a = first.emit();
            let b = second.emit();

            assert_eq!(first.particle(a), second.particle(b));
        }
    }

    #[test]
    fn unseeded_builds_emit_within_ranges() {
        let mut system = ParticleSystemBuilder::new()
            .properties(EmissionProperties {
                linear_velocity_speed: ValueRange::new(3.0, 2.0),
                ..EmissionProperties::default()
            })
            .build()
            .unwrap();

        for _ in 0..20 {
            let key = system.emit();
            let speed = system.particle(key).linear_velocity().x;

            assert!((2.0..=4.0).contains(&speed));
        }
    }

    #[test]
    fn debug_output_names_the_builder() {
        let builder = ParticleSystemBuilder::new().seed(3);

        assert!(format!("{builder:?}").contains("ParticleSystemBuilder"));
    }
}
