//! Basic benchmarks for the `particles` package.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use particles::{Angle, ParticleSystem, Point, ValueRange};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const CAPACITY: usize = 1024;
const EMITTED_PER_UPDATE: usize = 10;

fn configured_system() -> ParticleSystem {
    let mut system = ParticleSystem::builder()
        .capacity(CAPACITY)
        .seed(1)
        .build()
        .unwrap();

    let properties = system.properties_mut();
    properties.position = ValueRange::new(Point::ZERO, Point::new(100.0, 100.0));
    properties.lifetime = ValueRange::new(120, 60);
    properties.linear_velocity_angle = ValueRange::new(Angle::ZERO, Angle::from_degrees(360.0));
    properties.linear_velocity_speed = ValueRange::new(2.0, 1.0);
    properties.angular_velocity = ValueRange::new(Angle::ZERO, Angle::from_radians(0.1));

    system
}

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps_create");

    group.bench_function("builder", |b| {
        b.iter(|| drop(black_box(configured_system())));
    });

    group.finish();

    let mut group = c.benchmark_group("ps_tick");

    group.bench_function("emit", |b| {
        let mut system = configured_system();

        b.iter(|| black_box(system.emit()));
    });

    group.bench_function("emit_and_update", |b| {
        let mut system = configured_system();

        b.iter(|| {
            for _ in 0..EMITTED_PER_UPDATE {
                black_box(system.emit());
            }

            system.update();
        });
    });

    group.bench_function("update_full", |b| {
        let mut system = configured_system();
        system.properties_mut().lifetime = ValueRange::fixed(u32::MAX);

        for _ in 0..CAPACITY {
            system.emit();
        }

        b.iter(|| system.update());
    });

    group.finish();
}
