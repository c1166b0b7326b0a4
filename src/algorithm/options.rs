//! Generation options with an explicit default table

use crate::algorithm::sampling::SampleCallback;
use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_NOISE, DEFAULT_COLOR_VARIATIONS, DEFAULT_EDGE_BRIGHTNESS,
    DEFAULT_SATURATION,
};
use crate::math::color::Rgb;

/// Multiplicative RGB factors applied to every non-empty pixel
///
/// Factors are conventionally in `[0, 1]` but not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    /// Red factor
    pub r: f64,
    /// Green factor
    pub g: f64,
    /// Blue factor
    pub b: f64,
}

impl Tint {
    /// Create a tint from its three factors
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Factors as a color for channel-wise multiplication
    pub const fn as_rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Options controlling sampling and colorization
///
/// Out-of-range values are accepted and produce deterministic but unspecified
/// colors. Override individual fields with struct update syntax:
///
/// ```
/// use pixelsprite::algorithm::options::Options;
///
/// let options = Options {
///     colored: true,
///     seed: Some("ship-1".to_string()),
///     ..Options::default()
/// };
/// assert!((options.saturation - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Colored output; otherwise black borders on white
    pub colored: bool,
    /// Brightness multiplier for border pixels in colored mode
    pub edge_brightness: f64,
    /// Higher values change hue more often along the gradient axis
    pub color_variations: f64,
    /// Share of brightness taken from noise instead of the gradient
    pub brightness_noise: f64,
    /// Upper bound of the randomly drawn saturation
    pub saturation: f64,
    /// Seed for reproducible output; `None` draws from entropy
    pub seed: Option<String>,
    /// Tint applied to non-empty pixels; replaced whole, never merged
    pub tint: Option<Tint>,
    /// Per-cell sampling policy
    pub sampler: SampleCallback,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            colored: false,
            edge_brightness: DEFAULT_EDGE_BRIGHTNESS,
            color_variations: DEFAULT_COLOR_VARIATIONS,
            brightness_noise: DEFAULT_BRIGHTNESS_NOISE,
            saturation: DEFAULT_SATURATION,
            seed: None,
            tint: None,
            sampler: SampleCallback::Default,
        }
    }
}

impl Options {
    /// Tint factors, or identity when no tint is set
    pub fn tint_mask(&self) -> Rgb {
        self.tint.map_or(Rgb::WHITE, Tint::as_rgb)
    }
}
