use rand::SeedableRng;
use rand::rngs::SmallRng;
use reuse_pool::{Key, ReusePool};
use tracing::{debug, trace};

use crate::{EmissionProperties, Gradient, Particle, ParticleSystemBuilder, Point, Rgba};

/// A 2D particle system with a fixed number of particles.
///
/// The caller drives the system by calling [`emit()`][Self::emit] to create particles and
/// [`update()`][Self::update] once per simulation tick to move them along. Every particle lives
/// for a number of updates decided at emission, after which it is recycled.
///
/// All particles are created when the system is created and no memory is allocated afterwards.
/// If a particle is emitted while all particles are alive, the particle that has been alive the
/// longest is replaced. It disappears without expiring first.
///
/// # Example
///
/// ```rust
/// use particles::{Angle, ParticleSystem, ValueRange};
///
/// let mut system = ParticleSystem::new(100);
/// system.properties_mut().lifetime = ValueRange::fixed(30);
/// system.properties_mut().linear_velocity_speed = ValueRange::new(2.0, 1.0);
/// system.properties_mut().linear_velocity_angle =
///     ValueRange::new(Angle::ZERO, Angle::from_degrees(360.0));
///
/// for _ in 0..10 {
///     system.emit();
///     system.update();
/// }
///
/// assert_eq!(system.len(), 10);
///
/// for particle in system.particles() {
///     let _corners = particle.quad().points();
///     let _color = particle.color();
/// }
/// ```
///
/// # Thread safety
///
/// The system can be moved between threads but all operations take `&mut self` or `&self`, so
/// sharing it across threads requires external synchronization.
#[derive(Debug)]
pub struct ParticleSystem {
    pool: ReusePool<Particle>,

    properties: EmissionProperties,

    color_gradient: Gradient<Rgba>,
    size_gradient: Gradient<f64>,

    rng: SmallRng,
}

impl ParticleSystem {
    /// Creates a particle system that holds up to `capacity` particles, with default emission
    /// properties and gradients.
    ///
    /// Emitting more than `capacity` particles replaces the oldest ones.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`builder()`][Self::builder] to get an error instead.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_parts(
            ReusePool::with_default(capacity),
            EmissionProperties::default(),
            default_color_gradient(),
            default_size_gradient(),
            SmallRng::from_rng(&mut rand::rng()),
        )
    }

    /// Starts building a new [`ParticleSystem`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use particles::{ParticleSystem, Rgba, Gradient};
    ///
    /// let system = ParticleSystem::builder()
    ///     .capacity(512)
    ///     .color_gradient(Gradient::with_endpoints(Rgba::WHITE, Rgba::TRANSPARENT))
    ///     .seed(1234)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(system.capacity(), 512);
    /// ```
    pub fn builder() -> ParticleSystemBuilder {
        ParticleSystemBuilder::new()
    }

    pub(crate) fn from_parts(
        pool: ReusePool<Particle>,
        properties: EmissionProperties,
        color_gradient: Gradient<Rgba>,
        size_gradient: Gradient<f64>,
        rng: SmallRng,
    ) -> Self {
        debug!(
            capacity = pool.capacity(),
            color_stops = color_gradient.len(),
            size_stops = size_gradient.len(),
            "created particle system"
        );

        Self {
            pool,
            properties,
            color_gradient,
            size_gradient,
            rng,
        }
    }

    /// The maximum number of particles that can be alive at the same time.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// The number of particles that are alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.number_of_unavailable()
    }

    /// Whether no particles are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of particles that can be emitted before the oldest ones start being replaced.
    #[must_use]
    pub fn number_of_available(&self) -> usize {
        self.pool.number_of_available()
    }

    /// The number of particles that are alive. Same as [`len()`][Self::len].
    #[must_use]
    pub fn number_of_unavailable(&self) -> usize {
        self.pool.number_of_unavailable()
    }

    /// The properties that emitted particles are initialized from.
    #[must_use]
    pub fn properties(&self) -> &EmissionProperties {
        &self.properties
    }

    /// The properties that emitted particles are initialized from, for modification.
    #[must_use]
    pub fn properties_mut(&mut self) -> &mut EmissionProperties {
        &mut self.properties
    }

    /// The color of particles over their lifetime.
    #[must_use]
    pub fn color_gradient(&self) -> &Gradient<Rgba> {
        &self.color_gradient
    }

    /// The color of particles over their lifetime, for modification.
    ///
    /// The gradient must have at least one stop whenever [`update()`][Self::update] is called.
    #[must_use]
    pub fn color_gradient_mut(&mut self) -> &mut Gradient<Rgba> {
        &mut self.color_gradient
    }

    /// The size of particles over their lifetime.
    #[must_use]
    pub fn size_gradient(&self) -> &Gradient<f64> {
        &self.size_gradient
    }

    /// The size of particles over their lifetime, for modification.
    ///
    /// The gradient must have at least one stop whenever [`update()`][Self::update] is called.
    #[must_use]
    pub fn size_gradient_mut(&mut self) -> &mut Gradient<f64> {
        &mut self.size_gradient
    }

    /// The particles that are alive, starting with the one emitted longest ago.
    #[must_use]
    pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> {
        self.pool.unavailable_elements().map(|(_, particle)| particle)
    }

    /// Returns the particle named by `key`, as returned by [`emit()`][Self::emit].
    ///
    /// The key keeps naming the same storage after the particle expires or is replaced, so the
    /// returned particle may be a different one than was originally emitted.
    ///
    /// # Panics
    ///
    /// Panics if the key was not created by this particle system.
    #[must_use]
    pub fn particle(&self, key: Key) -> &Particle {
        self.pool.get(key)
    }

    /// Emits a particle, initializing it from the emission properties.
    ///
    /// If all particles are alive, the one emitted longest ago is replaced.
    pub fn emit(&mut self) -> Key {
        let key = self.dequeue_particle();

        let properties = &self.properties;
        let rng = &mut self.rng;

        let position = properties.position.sample(rng);
        let velocity_angle = properties.linear_velocity_angle.sample(rng).radians();
        let speed = properties.linear_velocity_speed.sample(rng);
        let angle = properties.angle.sample(rng);
        let angular_velocity = properties.angular_velocity.sample(rng);
        let lifetime = properties.lifetime.sample(rng);

        let particle = self.pool.get_mut(key);
        particle.position = position;
        particle.linear_velocity = Point::new(
            velocity_angle.cos() * speed,
            velocity_angle.sin() * speed,
        );
        particle.angle = angle;
        particle.angular_velocity = angular_velocity;
        particle.lifetime = lifetime;
        particle.remaining_lifetime = lifetime;

        key
    }

    /// Advances every particle that is alive by one tick.
    ///
    /// Particles without any remaining lifetime are recycled. All other particles get their
    /// color and quad derived from their current state and age, then move, rotate and lose one
    /// tick of remaining lifetime.
    ///
    /// # Panics
    ///
    /// Panics if a particle is alive and either gradient has no stops.
    pub fn update(&mut self) {
        let mut expired: usize = 0;
        let mut cursor = self.pool.first_unavailable();

        while let Some(key) = cursor {
            // Capture the successor first because recycling unlinks the particle.
            cursor = self.pool.next(key);

            let particle = self.pool.get_mut(key);

            if particle.is_expired() {
                self.pool.enqueue(key);
                expired = expired.saturating_add(1);
                continue;
            }

            particle.advance(&self.color_gradient, &self.size_gradient);
        }

        trace!(expired, alive = self.len(), "updated particle system");
    }

    /// Recycles every particle that is alive.
    pub fn remove_all(&mut self) {
        let mut removed: usize = 0;

        while let Some(key) = self.pool.first_unavailable() {
            self.pool.enqueue(key);
            removed = removed.saturating_add(1);
        }

        debug!(removed, "removed all particles");
    }

    fn dequeue_particle(&mut self) -> Key {
        if let Some(key) = self.pool.dequeue_first_available() {
            return key;
        }

        let key = self
            .pool
            .dequeue_first_unavailable()
            .expect("a pool with no available particles must have particles in use");

        trace!(
            index = key.index(),
            "particle system at capacity, replaced oldest particle"
        );

        key
    }
}

fn default_color_gradient() -> Gradient<Rgba> {
    Gradient::with_endpoints(Rgba::RED, Rgba::YELLOW)
}

fn default_size_gradient() -> Gradient<f64> {
    Gradient::with_endpoints(1.0, 1.0)
}

pub(crate) fn default_gradients() -> (Gradient<Rgba>, Gradient<f64>) {
    (default_color_gradient(), default_size_gradient())
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::{Angle, ValueRange};

    assert_impl_all!(ParticleSystem: Send, std::fmt::Debug);

    fn seeded(capacity: usize) -> ParticleSystem {
        ParticleSystem::builder()
            .capacity(capacity)
            .seed(99)
            .build()
            .unwrap()
    }

    #[test]
    fn starts_empty() {
        let system = seeded(4);

        assert!(system.is_empty());
        assert_eq!(system.particles().count(), 0);
        assert_eq!(system.number_of_available(), 4);
        assert_eq!(system.capacity(), 4);
    }

    #[test]
    fn default_gradients_are_red_to_yellow_and_unit_size() {
        let system = seeded(1);

        assert_eq!(system.color_gradient().value_at(0.0), Rgba::RED);
        assert_eq!(system.color_gradient().value_at(1.0), Rgba::YELLOW);
        assert_eq!(system.size_gradient().value_at(0.5), 1.0);
        assert_eq!(system.properties().lifetime.origin(), 60);
    }

    #[test]
    fn emit_initializes_from_properties() {
        let mut system = seeded(2);
        system.properties_mut().position = ValueRange::fixed(Point::new(3.0, 4.0));
        system.properties_mut().linear_velocity_speed = ValueRange::fixed(2.0);
        system.properties_mut().angle = ValueRange::fixed(Angle::from_radians(0.25));
        system.properties_mut().angular_velocity = ValueRange::fixed(Angle::from_radians(0.5));
        system.properties_mut().lifetime = ValueRange::fixed(12);

        let key = system.emit();
        let particle = system.particle(key);

        assert_eq!(particle.position(), Point::new(3.0, 4.0));
        assert_eq!(particle.linear_velocity(), Point::new(2.0, 0.0));
        assert_eq!(particle.angle(), Angle::from_radians(0.25));
        assert_eq!(particle.angular_velocity(), Angle::from_radians(0.5));
        assert_eq!(particle.lifetime(), 12);
        assert_eq!(particle.remaining_lifetime(), 12);
    }

    #[test]
    fn velocity_follows_angle() {
        let mut system = seeded(1);
        system.properties_mut().linear_velocity_speed = ValueRange::fixed(3.0);
        system.properties_mut().linear_velocity_angle =
            ValueRange::fixed(Angle::from_degrees(90.0));

        let key = system.emit();
        let velocity = system.particle(key).linear_velocity();

        assert!(velocity.x.abs() < 1e-12);
        assert!((velocity.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn update_derives_color_from_age() {
        let mut system = seeded(1);
        system.properties_mut().lifetime = ValueRange::fixed(4);

        let key = system.emit();

        system.update();
        assert_eq!(system.particle(key).color(), Rgba::RED);

        system.update();
        assert_eq!(system.particle(key).color(), Rgba::new(1.0, 0.25, 0.0, 1.0));
    }

    #[test]
    fn update_recycles_only_expired_particles() {
        let mut system = seeded(3);

        system.properties_mut().lifetime = ValueRange::fixed(1);
        _ = system.emit();
        system.properties_mut().lifetime = ValueRange::fixed(5);
        let survivor = system.emit();
        system.properties_mut().lifetime = ValueRange::fixed(1);
        _ = system.emit();

        system.update();
        assert_eq!(system.len(), 3);

        system.update();
        assert_eq!(system.len(), 1);
        assert_eq!(system.particles().next(), Some(system.particle(survivor)));
        assert_eq!(system.particle(survivor).remaining_lifetime(), 3);
    }

    #[test]
    fn zero_lifetime_particle_is_recycled_on_first_update() {
        let mut system = seeded(1);
        system.properties_mut().lifetime = ValueRange::fixed(0);

        _ = system.emit();
        assert_eq!(system.len(), 1);

        system.update();
        assert!(system.is_empty());
    }

    #[test]
    fn remove_all_recycles_everything() {
        let mut system = seeded(3);

        for _ in 0..3 {
            _ = system.emit();
        }

        assert_eq!(system.len(), 3);

        system.remove_all();
        assert_eq!(system.len(), 0);
        assert_eq!(system.number_of_available(), 3);

        _ = system.emit();
        assert_eq!(system.len(), 1);
    }

    #[test]
    #[should_panic]
    fn update_with_empty_gradient_panics() {
        let mut system = seeded(1);
        system.size_gradient_mut().remove_all();

        _ = system.emit();
        system.update();
    }

    #[test]
    fn update_with_empty_gradient_and_no_particles_is_fine() {
        let mut system = seeded(1);
        system.size_gradient_mut().remove_all();

        system.update();
    }

    #[test]
    #[should_panic]
    fn zero_capacity_is_panic() {
        drop(ParticleSystem::new(0));
    }
}
