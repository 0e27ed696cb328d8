use thiserror::Error;

/// Errors that can occur when configuring a particle system.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The particle system was configured without room for any particles.
    #[error("particle system capacity must be greater than zero")]
    ZeroCapacity,

    /// An emission property has a spread that cannot be sampled from.
    #[error("emission property '{property}' has a negative or non-finite spread")]
    InvalidSpread {
        /// The name of the emission property with the invalid spread.
        property: &'static str,
    },

    /// A gradient stop was given a location that cannot be ordered.
    #[error("gradient location {location} is not a finite number")]
    InvalidGradientLocation {
        /// The rejected location.
        location: f64,
    },

    /// A gradient that the particle system reads every update has no stops.
    #[error("the {gradient} gradient has no stops")]
    EmptyGradient {
        /// The name of the empty gradient.
        gradient: &'static str,
    },
}

/// A specialized `Result` type for particle system configuration, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    clippy::items_after_statements,
    clippy::float_cmp,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug, std::error::Error);

    #[test]
    fn messages_name_the_culprit() {
        let error = Error::InvalidSpread {
            property: "linear_velocity_speed",
        };
        assert!(error.to_string().contains("linear_velocity_speed"));

        let error = Error::EmptyGradient { gradient: "size" };
        assert_eq!(error.to_string(), "the size gradient has no stops");
    }
}
