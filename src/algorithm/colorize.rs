//! Gradient colorization of the finished structural grid into RGBA bytes
//!
//! Draw order per generation: gradient axis, saturation, initial hue, then for
//! every line along the gradient axis three color-change draws, an optional
//! hue draw, and one brightness draw per non-empty cell in colored mode.

use std::f64::consts::PI;

use crate::algorithm::options::Options;
use crate::algorithm::random::RandomSource;
use crate::math::color::{Rgb, hsl_like, quantize_channel};
use crate::spatial::{StructuralCode, StructuralGrid};

/// Bytes per RGBA pixel
pub const CHANNELS: usize = 4;

/// Direction along which hue changes are decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    /// Outer loop over columns, brightness varies left to right
    Horizontal,
    /// Outer loop over rows, brightness varies top to bottom
    Vertical,
}

impl GradientAxis {
    /// Map `(u, v)` loop coordinates to grid `(x, y)`
    const fn cell(self, u: usize, v: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (u, v),
            Self::Vertical => (v, u),
        }
    }
}

/// Color-change signal for one gradient line
///
/// Consumes three draws mapped to `[-1, 1)`; only the last one feeds the
/// returned `|last / 3|`.
pub fn color_change_signal(random: &mut RandomSource) -> f64 {
    let mut last = 0.0;
    for _ in 0..3 {
        last = random.next_f64().mul_add(2.0, -1.0);
    }
    (last / 3.0).abs()
}

/// Render the grid into a row-major RGBA buffer
///
/// Channels are computed in floating point as `rgb * 255 * tint` and only
/// then rounded and saturated to a byte. Empty cells are opaque untinted white.
pub fn colorize(
    grid: &StructuralGrid,
    options: &Options,
    random: &mut RandomSource,
) -> (Vec<u8>, GradientAxis) {
    let width = grid.width();
    let height = grid.height();
    let mut pixels = vec![0u8; width * height * CHANNELS];

    let axis = if random.next_f64() > 0.5 {
        GradientAxis::Vertical
    } else {
        GradientAxis::Horizontal
    };
    let (ulen, vlen) = match axis {
        GradientAxis::Vertical => (height, width),
        GradientAxis::Horizontal => (width, height),
    };

    let saturation = (random.next_f64() * options.saturation).clamp(0.0, 1.0);
    let mut hue = random.next_f64();
    let tint = options.tint_mask();

    for u in 0..ulen {
        if color_change_signal(random) > 1.0 - options.color_variations {
            hue = random.next_f64();
        }

        for v in 0..vlen {
            let (x, y) = axis.cell(u, v);
            let Some(code) = grid.get(x, y) else {
                continue;
            };

            let color = if code == StructuralCode::Empty {
                Rgb::WHITE.scale(255.0)
            } else {
                let base = if options.colored {
                    let gradient = (u as f64 / ulen as f64 * PI).sin();
                    let brightness = gradient
                        .mul_add(1.0 - options.brightness_noise, random.next_f64())
                        + options.brightness_noise;
                    let rgb = hsl_like(hue, saturation, brightness);
                    if code == StructuralCode::AlwaysBorder {
                        rgb.scale(options.edge_brightness)
                    } else {
                        rgb
                    }
                } else if code == StructuralCode::AlwaysBorder {
                    Rgb::BLACK
                } else {
                    Rgb::WHITE
                };
                base.scale(255.0).modulate(tint)
            };

            let index = (y * width + x) * CHANNELS;
            if let Some(pixel) = pixels.get_mut(index..index + CHANNELS) {
                pixel.copy_from_slice(&[
                    quantize_channel(color.r),
                    quantize_channel(color.g),
                    quantize_channel(color.b),
                    u8::MAX,
                ]);
            }
        }
    }

    (pixels, axis)
}
