//! A 2D particle system that emits, animates and recycles a bounded set of particles.
//!
//! The central type is [`ParticleSystem`]. It owns a fixed number of [`Particle`]s, created up
//! front and recycled through a [`reuse_pool::ReusePool`], so the system does not allocate while
//! it runs. When more particles are emitted than fit, the oldest particle is replaced.
//!
//! Each emitted particle is initialized from [`EmissionProperties`], a set of [`ValueRange`]s
//! that are sampled independently per particle. Over its lifetime, the color and size of a
//! particle follow a [`Gradient`] indexed by the particle's normalized age.
//!
//! The system is driven by the caller: [`ParticleSystem::emit()`] adds a particle and
//! [`ParticleSystem::update()`] advances all particles by one tick. Rendering is left to the
//! caller, who reads the [`Quad`] and [`Rgba`] color of each particle in
//! [`ParticleSystem::particles()`].
//!
//! # Example
//!
//! ```rust
//! use particles::{Angle, Gradient, ParticleSystem, Point, Rgba, ValueRange};
//!
//! let mut fountain = ParticleSystem::builder()
//!     .capacity(200)
//!     .color_gradient(Gradient::with_endpoints(Rgba::WHITE, Rgba::TRANSPARENT))
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let properties = fountain.properties_mut();
//! properties.position = ValueRange::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
//! properties.lifetime = ValueRange::new(40, 10);
//! properties.linear_velocity_angle =
//!     ValueRange::new(Angle::from_degrees(90.0), Angle::from_degrees(20.0));
//! properties.linear_velocity_speed = ValueRange::new(1.5, 0.5);
//!
//! for _ in 0..30 {
//!     fountain.emit();
//!     fountain.update();
//! }
//!
//! assert_eq!(fountain.len(), 30);
//!
//! for particle in fountain.particles() {
//!     // Draw particle.quad() filled with particle.color().
//!     assert!(particle.color().alpha <= 1.0);
//! }
//! ```

mod angle;
mod builder;
mod error;
mod gradient;
mod interpolate;
mod particle;
mod point;
mod properties;
mod quad;
mod rgba;
mod system;
mod value_range;

pub use angle::*;
pub use builder::*;
pub use error::*;
pub use gradient::*;
pub use interpolate::*;
pub use particle::*;
pub use point::*;
pub use properties::*;
pub use quad::*;
pub use reuse_pool::Key;
pub use rgba::*;
pub use system::*;
pub use value_range::*;
