/// A color with red, green, blue and alpha channels, each nominally in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a color is fully described by its four channels"
)]
pub struct Rgba {
    /// The red channel.
    pub red: f64,

    /// The green channel.
    pub green: f64,

    /// The blue channel.
    pub blue: f64,

    /// The alpha channel, where 0 is fully transparent and 1 is fully opaque.
    pub alpha: f64,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}
