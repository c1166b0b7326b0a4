use tracing::{Level, debug, span, warn};

use crate::{
    algorithm::colorize::{CHANNELS, GradientAxis, colorize},
    algorithm::options::Options,
    algorithm::random::RandomSource,
    algorithm::sampling::sample_grid,
    io::error::{GenerationWarning, Result},
    spatial::{Mask, StructuralGrid},
};

/// One completed sprite generation
///
/// Construction runs the whole pipeline synchronously: apply mask, sample,
/// mirror x, mirror y, synthesize edges, colorize. The result is read-only.
#[derive(Debug, Clone)]
pub struct Sprite {
    grid: StructuralGrid,
    pixels: Vec<u8>,
    gradient_axis: GradientAxis,
    warnings: Vec<GenerationWarning>,
    draws: u64,
}

impl Sprite {
    /// Generate a sprite, seeding from `options.seed` when present
    ///
    /// # Errors
    ///
    /// Returns an error if the mask template does not fit its effective grid
    pub fn new(mask: &Mask, options: &Options) -> Result<Self> {
        let random = RandomSource::new(options.seed.as_deref());
        Self::with_random(mask, options, random)
    }

    /// Generate a sprite drawing from an explicit random source
    ///
    /// `options.seed` is ignored; the caller's source is used as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask template does not fit its effective grid
    pub fn with_random(mask: &Mask, options: &Options, mut random: RandomSource) -> Result<Self> {
        let span = span!(
            Level::DEBUG,
            "generate_sprite",
            width = mask.effective_width(),
            height = mask.effective_height()
        );
        let _enter = span.enter();

        let mut grid = StructuralGrid::for_mask(mask);
        grid.apply_mask(mask)?;
        debug!(stage = "apply_mask", "Mask applied");

        sample_grid(&mut grid, &options.sampler, &mut random);
        debug!(stage = "random_sample", draws = random.draws(), "Grid sampled");

        let mut warnings = Vec::new();
        if mask.mirror_x() {
            warnings.extend(grid.mirror_x());
            debug!(stage = "mirror_x", "Mirrored horizontally");
        }
        if mask.mirror_y() {
            warnings.extend(grid.mirror_y());
            debug!(stage = "mirror_y", "Mirrored vertically");
        }
        for warning in &warnings {
            warn!("{warning}");
        }

        grid.synthesize_edges();
        debug!(stage = "synthesize_edges", "Edges synthesized");

        let (pixels, gradient_axis) = colorize(&grid, options, &mut random);
        debug!(
            stage = "colorize",
            draws = random.draws(),
            ?gradient_axis,
            "Pixels colorized"
        );

        Ok(Self {
            grid,
            pixels,
            gradient_axis,
            warnings,
            draws: random.draws(),
        })
    }

    /// Width after mirroring
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height after mirroring
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Row-major RGBA bytes, `width * height * 4` long
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let index = (y * self.width() + x) * CHANNELS;
        self.pixels
            .get(index..index + CHANNELS)
            .and_then(|slice| <[u8; 4]>::try_from(slice).ok())
    }

    /// Final structural grid
    pub const fn grid(&self) -> &StructuralGrid {
        &self.grid
    }

    /// Textual dump of the final structural grid
    pub fn dump(&self) -> String {
        self.grid.to_string()
    }

    /// Axis chosen for the color gradient
    pub const fn gradient_axis(&self) -> GradientAxis {
        self.gradient_axis
    }

    /// Non-fatal conditions met during generation
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    /// Total number of random values consumed
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Take ownership of the pixel buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
