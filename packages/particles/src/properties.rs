use crate::{Angle, Error, Point, Result, ValueRange};

/// The properties that newly emitted particles are initialized from.
///
/// Each property is a [`ValueRange`], sampled independently for every emitted particle. The
/// properties can be changed at any time and affect only particles emitted afterwards.
///
/// # Example
///
/// ```rust
/// use particles::{Angle, EmissionProperties, Point, ValueRange};
///
/// let properties = EmissionProperties {
///     position: ValueRange::new(Point::new(100.0, 100.0), Point::new(20.0, 0.0)),
///     lifetime: ValueRange::new(90, 30),
///     linear_velocity_angle: ValueRange::new(Angle::from_degrees(90.0), Angle::from_degrees(30.0)),
///     linear_velocity_speed: ValueRange::new(2.0, 0.5),
///     ..EmissionProperties::default()
/// };
///
/// properties.validate().unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "public fields allow struct update syntax from the default properties"
)]
pub struct EmissionProperties {
    /// Where particles are emitted.
    pub position: ValueRange<Point>,

    /// How many updates particles live for. Defaults to 60 with no spread.
    pub lifetime: ValueRange<u32>,

    /// The direction in which particles move.
    pub linear_velocity_angle: ValueRange<Angle>,

    /// The distance particles move per update.
    pub linear_velocity_speed: ValueRange<f64>,

    /// The initial rotation of particles.
    pub angle: ValueRange<Angle>,

    /// The rotation of particles per update.
    pub angular_velocity: ValueRange<Angle>,
}

/// The lifetime of particles when not otherwise configured.
const DEFAULT_LIFETIME: u32 = 60;

impl EmissionProperties {
    /// Checks that every property can be sampled from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpread`] naming the first property whose spread is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        let spreads = [
            ("position", self.position.has_valid_spread()),
            ("lifetime", self.lifetime.has_valid_spread()),
            (
                "linear_velocity_angle",
                self.linear_velocity_angle.has_valid_spread(),
            ),
            (
                "linear_velocity_speed",
                self.linear_velocity_speed.has_valid_spread(),
            ),
            ("angle", self.angle.has_valid_spread()),
            ("angular_velocity", self.angular_velocity.has_valid_spread()),
        ];

        match spreads.into_iter().find(|(_, is_valid)| !is_valid) {
            Some((property, _)) => Err(Error::InvalidSpread { property }),
            None => Ok(()),
        }
    }
}

impl Default for EmissionProperties {
    fn default() -> Self {
        Self {
            position: ValueRange::default(),
            lifetime: ValueRange::fixed(DEFAULT_LIFETIME),
            linear_velocity_angle: ValueRange::default(),
            linear_velocity_speed: ValueRange::default(),
            angle: ValueRange::default(),
            angular_velocity: ValueRange::default(),
        }
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
    fn defaults() {
        let properties = EmissionProperties::default();

        assert_eq!(properties.lifetime, ValueRange::new(60, 0));
        assert_eq!(properties.position, ValueRange::new(Point::ZERO, Point::ZERO));
        assert_eq!(properties.linear_velocity_speed, ValueRange::new(0.0, 0.0));
        properties.validate().unwrap();
    }

    #[test]
    fn negative_spread_is_reported_by_name() {
        let properties = EmissionProperties {
            angular_velocity: ValueRange::new(Angle::ZERO, Angle::from_radians(-0.1)),
            ..EmissionProperties::default()
        };

        assert!(matches!(
            properties.validate(),
            Err(Error::InvalidSpread {
                property: "angular_velocity"
            })
        ));
    }

    #[test]
    fn non_finite_point_spread_is_reported() {
        let properties = EmissionProperties {
            position: ValueRange::new(Point::ZERO, Point::new(f64::NAN, 0.0)),
            ..EmissionProperties::default()
        };

        assert!(matches!(
            properties.validate(),
            Err(Error::InvalidSpread {
                property: "position"
            })
        ));
    }
}
