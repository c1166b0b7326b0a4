//! Sprite color model and channel quantization

/// Linear RGB triple with channels nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Full-intensity white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from channels
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by the same factor
    #[must_use]
    pub const fn scale(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Channel-wise product
    #[must_use]
    pub const fn modulate(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

/// Hue/saturation/lightness to RGB using the sprite color model
///
/// Sector arithmetic of an HSV conversion driven by lightness as the value
/// term; this is not textbook HSL and the exact formula determines the palette.
/// Inputs are not clamped, so lightness above 1 yields channels above 1.
pub fn hsl_like(h: f64, s: f64, l: f64) -> Rgb {
    let sector = (h * 6.0).floor();
    let f = h.mul_add(6.0, -sector);
    let p = l * (1.0 - s);
    let q = l * f.mul_add(-s, 1.0);
    let t = l * (1.0 - f).mul_add(-s, 1.0);

    match (sector as i64).rem_euclid(6) {
        0 => Rgb::new(l, t, p),
        1 => Rgb::new(q, l, p),
        2 => Rgb::new(p, l, t),
        3 => Rgb::new(p, q, l),
        4 => Rgb::new(t, p, l),
        _ => Rgb::new(l, p, q),
    }
}

/// Convert a channel already scaled to `[0, 255]` into a byte
///
/// Rounds half away from zero and saturates; NaN becomes 0.
pub fn quantize_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
