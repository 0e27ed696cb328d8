//! Integration tests for the `particles` package, driving particle systems through whole
//! lifetimes using only the public API.

#![allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]

use particles::{Angle, Gradient, ParticleSystem, Point, Rgba, ValueRange};

fn seeded(capacity: usize) -> ParticleSystem {
    ParticleSystem::builder()
        .capacity(capacity)
        .seed(2024)
        .build()
        .unwrap()
}

#[test]
fn capacity_overflow_replaces_oldest() {
    let mut system = seeded(3);
    system.properties_mut().lifetime = ValueRange::fixed(100);
    system.properties_mut().angular_velocity = ValueRange::fixed(Angle::ZERO);

    assert_eq!(system.particles().count(), 0);

    for i in 0..3_u32 {
        system.properties_mut().angle = ValueRange::fixed(Angle::from_radians(f64::from(i)));
        _ = system.emit();
    }

    assert_eq!(system.particles().count(), 3);

    for (i, particle) in (0..3_u32).zip(system.particles()) {
        assert_eq!(particle.remaining_lifetime(), 100);
        assert_eq!(particle.angle(), Angle::from_radians(f64::from(i)));
    }

    system.update();

    for particle in system.particles() {
        assert_eq!(particle.remaining_lifetime(), 99);
    }

    system.properties_mut().angle = ValueRange::fixed(Angle::from_radians(10.0));

    // At capacity, so this replaces the particle emitted first.
    _ = system.emit();

    assert_eq!(system.particles().count(), 3);
    assert_eq!(system.particles().next().unwrap().angle().radians(), 1.0);
    assert_eq!(system.particles().last().unwrap().angle().radians(), 10.0);

    for _ in 0..99 {
        system.update();
    }

    assert_eq!(system.particles().count(), 3);

    system.update();
    assert_eq!(system.particles().count(), 1);

    system.update();
    assert_eq!(system.particles().count(), 0);
}

#[test]
fn lifetime_counts_down_once_per_update() {
    const LIFETIME: u32 = 7;

    let mut system = seeded(1);
    system.properties_mut().lifetime = ValueRange::fixed(LIFETIME);

    let key = system.emit();

    for elapsed in 1..=LIFETIME {
        system.update();

        assert_eq!(system.len(), 1);
        assert_eq!(system.particle(key).remaining_lifetime(), LIFETIME - elapsed);
    }

    system.update();
    assert!(system.is_empty());

    // Nothing left to expire.
    system.update();
    assert!(system.is_empty());
    assert_eq!(system.number_of_available(), 1);
}

#[test]
fn remove_all_particles() {
    let mut system = seeded(3);

    for _ in 0..3 {
        _ = system.emit();
    }

    assert_eq!(system.particles().count(), 3);

    system.remove_all();

    assert_eq!(system.particles().count(), 0);
    assert_eq!(system.number_of_available(), 3);
}

#[test]
fn quad_is_placed_at_position_before_moving() {
    let mut system = seeded(1);
    system.properties_mut().position = ValueRange::fixed(Point::new(10.0, 20.0));
    system.properties_mut().linear_velocity_speed = ValueRange::fixed(5.0);
    system.size_gradient_mut().remove_all();
    system.size_gradient_mut().add(0.0, 4.0);

    let key = system.emit();
    system.update();

    let particle = system.particle(key);

    assert_eq!(
        particle.quad().points(),
        &[
            Point::new(8.0, 18.0),
            Point::new(12.0, 18.0),
            Point::new(12.0, 22.0),
            Point::new(8.0, 22.0),
        ]
    );
    assert_eq!(particle.position(), Point::new(15.0, 20.0));
    assert!(particle.quad().contains(Point::new(10.0, 20.0)));
    assert!(!particle.quad().contains(particle.position()));
}

#[test]
fn color_follows_gradient_over_lifetime() {
    let mut system = seeded(1);
    system.properties_mut().lifetime = ValueRange::fixed(4);
    *system.color_gradient_mut() = Gradient::with_endpoints(Rgba::RED, Rgba::YELLOW);

    let key = system.emit();

    let mut greens = Vec::new();

    for _ in 0..4 {
        system.update();
        greens.push(system.particle(key).color().green);
    }

    assert_eq!(greens, [0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn size_gradient_scales_quad() {
    let mut system = seeded(1);
    system.properties_mut().lifetime = ValueRange::fixed(2);
    *system.size_gradient_mut() = Gradient::with_endpoints(2.0, 6.0);

    let key = system.emit();

    system.update();
    let first = system.particle(key).quad().points();
    assert_eq!(first[2] - first[0], Point::new(2.0, 2.0));

    system.update();
    let second = system.particle(key).quad().points();
    assert_eq!(second[2] - second[0], Point::new(4.0, 4.0));
}

#[test]
fn same_seed_gives_same_simulation() {
    fn run() -> Vec<(Point, Angle, u32)> {
        let mut system = ParticleSystem::builder()
            .capacity(16)
            .seed(77)
            .build()
            .unwrap();

        let properties = system.properties_mut();
        properties.position = ValueRange::new(Point::ZERO, Point::new(50.0, 50.0));
        properties.lifetime = ValueRange::new(20, 10);
        properties.linear_velocity_angle = ValueRange::new(Angle::ZERO, Angle::from_degrees(360.0));
        properties.linear_velocity_speed = ValueRange::new(2.0, 1.0);
        properties.angular_velocity = ValueRange::new(Angle::ZERO, Angle::from_radians(0.2));

        for _ in 0..40 {
            _ = system.emit();
            _ = system.emit();
            system.update();
        }

        system
            .particles()
            .map(|particle| {
                (
                    particle.position(),
                    particle.angle(),
                    particle.remaining_lifetime(),
                )
            })
            .collect()
    }

    let first = run();

    assert_eq!(first.len(), 16);
    assert_eq!(first, run());
}

#[test]
fn emitted_values_stay_within_ranges() {
    let mut system = seeded(64);

    let position = ValueRange::new(Point::new(-5.0, 5.0), Point::new(2.0, 8.0));
    let lifetime = ValueRange::new(30, 12);
    let angle = ValueRange::new(Angle::from_radians(1.0), Angle::from_radians(0.5));

    system.properties_mut().position = position;
    system.properties_mut().lifetime = lifetime;
    system.properties_mut().angle = angle;

    for _ in 0..64 {
        _ = system.emit();
    }

    for particle in system.particles() {
        let point = particle.position();
        assert!((position.min().x..=position.max().x).contains(&point.x));
        assert!((position.min().y..=position.max().y).contains(&point.y));

        assert!((lifetime.min()..=lifetime.max()).contains(&particle.lifetime()));
        assert_eq!(particle.lifetime(), particle.remaining_lifetime());

        assert!(angle.min() <= particle.angle() && particle.angle() <= angle.max());
    }
}

#[test]
fn configuration_changes_affect_only_later_emissions() {
    let mut system = seeded(2);
    system.properties_mut().lifetime = ValueRange::fixed(10);

    let early = system.emit();
    system.properties_mut().lifetime = ValueRange::fixed(3);
    let late = system.emit();

    assert_eq!(system.particle(early).lifetime(), 10);
    assert_eq!(system.particle(late).lifetime(), 3);
}
