use reuse_pool::Reusable;

use crate::{Angle, Gradient, Point, Quad, Rgba};

/// A single particle of a [`ParticleSystem`][crate::ParticleSystem].
///
/// Particles are owned by the particle system, which creates all of them up front and recycles
/// them as they expire. Callers can read the state of particles that are alive but only the
/// particle system changes it.
///
/// The render state ([`quad()`][Self::quad] and [`color()`][Self::color]) is derived during each
/// update from the position and angle the particle had at the start of that update.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub(crate) position: Point,
    pub(crate) linear_velocity: Point,
    pub(crate) angle: Angle,
    pub(crate) angular_velocity: Angle,
    pub(crate) lifetime: u32,
    pub(crate) remaining_lifetime: u32,
    pub(crate) quad: Quad,
    pub(crate) color: Rgba,
}

impl Particle {
    /// The current position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The distance moved per update.
    #[must_use]
    pub fn linear_velocity(&self) -> Point {
        self.linear_velocity
    }

    /// The current rotation.
    #[must_use]
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The rotation per update.
    #[must_use]
    pub fn angular_velocity(&self) -> Angle {
        self.angular_velocity
    }

    /// The total number of updates the particle lives for, fixed at emission.
    #[must_use]
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    /// The number of updates left before the particle expires.
    #[must_use]
    pub fn remaining_lifetime(&self) -> u32 {
        self.remaining_lifetime
    }

    /// The geometry to draw for the particle.
    #[must_use]
    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    /// The color to draw the particle with.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Normalized age: 0 when the particle is emitted, approaching 1 as it nears expiry.
    ///
    /// Returns 1 for a particle that has expired.
    #[must_use]
    pub fn life(&self) -> f64 {
        if self.lifetime == 0 {
            return 1.0;
        }

        1.0 - f64::from(self.remaining_lifetime) / f64::from(self.lifetime)
    }

    /// Whether the particle has no updates left and will be recycled by the next update.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_lifetime == 0
    }

    /// Derives the render state from the current position and angle, then advances the particle
    /// by one update.
    ///
    /// Must not be called on an expired particle.
    pub(crate) fn advance(&mut self, color_gradient: &Gradient<Rgba>, size_gradient: &Gradient<f64>) {
        debug_assert!(!self.is_expired(), "advanced an expired particle");

        let life = self.life();

        self.color = color_gradient.value_at(life);

        let mut quad = Quad::centered_square(size_gradient.value_at(life));
        quad.rotate(self.angle);
        quad.translate(self.position);
        self.quad = quad;

        self.position += self.linear_velocity;
        self.angle += self.angular_velocity;

        self.remaining_lifetime = self
            .remaining_lifetime
            .checked_sub(1)
            .expect("only particles with remaining lifetime are advanced");
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            linear_velocity: Point::ZERO,
            angle: Angle::ZERO,
            angular_velocity: Angle::ZERO,
            lifetime: 0,
            remaining_lifetime: 0,
            quad: Quad::ZERO,
            color: Rgba::WHITE,
        }
    }
}

impl Reusable for Particle {
    fn reset_for_reuse(&mut self) {
        *self = Self::default();
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

    fn living(lifetime: u32) -> Particle {
        Particle {
            lifetime,
            remaining_lifetime: lifetime,
            ..Particle::default()
        }
    }

    #[test]
    fn life_runs_from_zero_towards_one() {
        let mut particle = living(4);
        assert_eq!(particle.life(), 0.0);

        particle.remaining_lifetime = 1;
        assert_eq!(particle.life(), 0.75);

        particle.remaining_lifetime = 0;
        assert_eq!(particle.life(), 1.0);
        assert!(particle.is_expired());
    }

    #[test]
    fn inert_particle_is_expired() {
        let particle = Particle::default();

        assert!(particle.is_expired());
        assert_eq!(particle.life(), 1.0);
        assert_eq!(particle.color(), Rgba::WHITE);
    }

    #[test]
    fn advance_uses_position_before_moving() {
        let mut particle = Particle {
            position: Point::new(5.0, 5.0),
            linear_velocity: Point::new(1.0, 0.0),
            ..living(10)
        };

        particle.advance(
            &Gradient::with_endpoints(Rgba::RED, Rgba::YELLOW),
            &Gradient::with_endpoints(2.0, 2.0),
        );

        assert_eq!(
            particle.quad().points(),
            &[
                Point::new(4.0, 4.0),
                Point::new(6.0, 4.0),
                Point::new(6.0, 6.0),
                Point::new(4.0, 6.0),
            ]
        );
        assert_eq!(particle.position(), Point::new(6.0, 5.0));
        assert_eq!(particle.color(), Rgba::RED);
        assert_eq!(particle.remaining_lifetime(), 9);
    }

    #[test]
    fn advance_rotates_by_angle_before_spinning() {
        let mut particle = Particle {
            angle: Angle::from_radians(1.0),
            angular_velocity: Angle::from_radians(0.5),
            ..living(3)
        };

        particle.advance(
            &Gradient::with_endpoints(Rgba::WHITE, Rgba::WHITE),
            &Gradient::with_endpoints(1.0, 1.0),
        );

        let mut expected = Quad::centered_square(1.0);
        expected.rotate(Angle::from_radians(1.0));

        assert_eq!(particle.quad(), &expected);
        assert_eq!(particle.angle(), Angle::from_radians(1.5));
    }

    #[test]
    fn reset_makes_particle_inert() {
        let mut particle = Particle {
            position: Point::new(1.0, 2.0),
            color: Rgba::RED,
            ..living(30)
        };

        particle.reset_for_reuse();

        assert_eq!(particle, Particle::default());
    }
}
