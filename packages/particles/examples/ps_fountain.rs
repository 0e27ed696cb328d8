//! Runs a particle fountain for a few seconds of simulated time and prints a summary of the
//! particles that are alive every second.
//!
//! Set `RUST_LOG=particles=trace` to see the events the particle system emits.

use particles::{Angle, Gradient, ParticleSystem, Point, Rgba, ValueRange};

const TICKS_PER_SECOND: u32 = 60;
const SECONDS: u32 = 5;
const EMITTED_PER_TICK: u32 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut color_gradient = Gradient::with_endpoints(Rgba::WHITE, Rgba::TRANSPARENT);
    color_gradient.try_add(0.3, Rgba::YELLOW)?;
    color_gradient.try_add(0.6, Rgba::RED)?;

    let mut fountain = ParticleSystem::builder()
        .capacity(300)
        .color_gradient(color_gradient)
        .size_gradient(Gradient::with_endpoints(2.0, 8.0))
        .build()?;

    let properties = fountain.properties_mut();
    properties.position = ValueRange::new(Point::new(0.0, 0.0), Point::new(6.0, 0.0));
    properties.lifetime = ValueRange::new(90, 30);
    properties.linear_velocity_angle =
        ValueRange::new(Angle::from_degrees(90.0), Angle::from_degrees(25.0));
    properties.linear_velocity_speed = ValueRange::new(3.0, 1.0);
    properties.angle = ValueRange::new(Angle::ZERO, Angle::from_degrees(360.0));
    properties.angular_velocity = ValueRange::new(Angle::ZERO, Angle::from_degrees(10.0));

    for second in 1..=SECONDS {
        for _ in 0..TICKS_PER_SECOND {
            for _ in 0..EMITTED_PER_TICK {
                fountain.emit();
            }

            fountain.update();
        }

        print_summary(second, &fountain);
    }

    fountain.remove_all();
    println!("removed all particles, {} alive", fountain.len());

    Ok(())
}

fn print_summary(second: u32, fountain: &ParticleSystem) {
    let highest = fountain
        .particles()
        .map(|particle| particle.position().y)
        .fold(f64::NEG_INFINITY, f64::max);

    let opaque = fountain
        .particles()
        .filter(|particle| particle.color().alpha > 0.5)
        .count();

    println!(
        "{second}s: {} of {} particles alive, {opaque} mostly opaque, highest at y = {highest:.1}",
        fountain.len(),
        fountain.capacity()
    );
}
