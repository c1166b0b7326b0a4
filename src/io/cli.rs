//! Command-line interface for generating sprites and sprite sheets

use crate::algorithm::batch::generate_batch_with;
use crate::algorithm::executor::Sprite;
use crate::algorithm::options::{Options, Tint};
use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_NOISE, DEFAULT_COLOR_VARIATIONS, DEFAULT_COUNT, DEFAULT_EDGE_BRIGHTNESS,
    DEFAULT_OUTPUT_STEM, DEFAULT_SATURATION, DEFAULT_SCALE, DEFAULT_SHEET_COLUMNS,
    DEFAULT_SHEET_PADDING, MAX_BATCH_COUNT, MAX_SCALE, MAX_SHEET_PADDING, OUTPUT_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_sprite_png, export_sprite_sheet};
use crate::io::mask_file::load_mask;
use crate::io::progress::ProgressManager;
use crate::spatial::{Mask, Preset};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "pixelsprite")]
#[command(
    author,
    version,
    about = "Generate symmetric pixel-art sprites from structural masks"
)]
/// Command-line arguments for the sprite generator
// Rendering and logging switches are independent boolean flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Built-in mask to use (defaults to spaceship)
    #[arg(short, long, value_enum, conflicts_with = "mask_file")]
    pub preset: Option<Preset>,

    /// Text mask file: one row per line of -1/0/1/2 codes
    #[arg(short, long, value_name = "PATH")]
    pub mask_file: Option<PathBuf>,

    /// Mirror a mask file horizontally
    #[arg(short = 'x', long)]
    pub mirror_x: bool,

    /// Mirror a mask file vertically
    #[arg(short = 'y', long)]
    pub mirror_y: bool,

    /// Number of sprites to generate; more than one writes a sprite sheet
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for reproducible output; sprite i of a batch is seeded with SEED-i
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Produce colored sprites instead of black on white
    #[arg(short, long)]
    pub colored: bool,

    /// Brightness multiplier for border pixels
    #[arg(long, default_value_t = DEFAULT_EDGE_BRIGHTNESS)]
    pub edge_brightness: f64,

    /// Tendency to change hue along the gradient
    #[arg(long, default_value_t = DEFAULT_COLOR_VARIATIONS)]
    pub color_variations: f64,

    /// Share of brightness driven by noise
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS_NOISE)]
    pub brightness_noise: f64,

    /// Upper bound of the random saturation
    #[arg(long, default_value_t = DEFAULT_SATURATION)]
    pub saturation: f64,

    /// Tint factors as R,G,B (e.g. 1,0.5,0.5)
    #[arg(short, long, value_parser = parse_tint)]
    pub tint: Option<Tint>,

    /// Integer pixel scale of the exported image
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Sprites per row in a sprite sheet
    #[arg(long, default_value_t = DEFAULT_SHEET_COLUMNS)]
    pub columns: usize,

    /// Transparent gap between sheet cells, in sprite pixels
    #[arg(long, default_value_t = DEFAULT_SHEET_PADDING)]
    pub padding: u32,

    /// Output PNG path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the structural grid of every sprite
    #[arg(short, long)]
    pub dump: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

/// Parse `R,G,B` into a tint
///
/// # Errors
///
/// Returns a message if the value is not three comma separated numbers
pub fn parse_tint(value: &str) -> std::result::Result<Tint, String> {
    let factors = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("'{}' is not a number: {e}", part.trim()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match factors.as_slice() {
        &[r, g, b] => Ok(Tint::new(r, g, b)),
        _ => Err(format!("expected R,G,B, got {} values", factors.len())),
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    /// Install the global tracing subscriber
    ///
    /// A subscriber installed earlier is kept.
    pub fn init_logging(&self) {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.log_level())
            .with_ansi(!self.no_color)
            .with_writer(std::io::stderr)
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    /// Generation options assembled from the flags
    pub fn options(&self) -> Options {
        Options {
            colored: self.colored,
            edge_brightness: self.edge_brightness,
            color_variations: self.color_variations,
            brightness_noise: self.brightness_noise,
            saturation: self.saturation,
            seed: self.seed.clone(),
            tint: self.tint,
            ..Options::default()
        }
    }

    /// Mask selected by `--mask-file` or `--preset`
    ///
    /// # Errors
    ///
    /// Returns an error if the mask file cannot be loaded
    pub fn mask(&self) -> Result<Mask> {
        match &self.mask_file {
            Some(path) => load_mask(path, self.mirror_x, self.mirror_y),
            None => self.preset.unwrap_or(Preset::Spaceship).mask(),
        }
    }

    /// Destination of the exported image
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let stem = match (&self.mask_file, self.preset) {
            (Some(path), _) => path
                .file_stem()
                .map_or_else(|| DEFAULT_OUTPUT_STEM.to_string(), |s| s.to_string_lossy().to_string()),
            (None, Some(preset)) => preset.name().to_string(),
            (None, None) => DEFAULT_OUTPUT_STEM.to_string(),
        };
        let suffix = if self.count > 1 { "_sheet" } else { "" };
        PathBuf::from(format!("{stem}{suffix}.{OUTPUT_EXTENSION}"))
    }

    /// Validate numeric arguments that Options does not cover
    ///
    /// # Errors
    ///
    /// Returns an error if `count`, `scale` or `columns` is out of range
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_BATCH_COUNT {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &format!("must be between 1 and {MAX_BATCH_COUNT}"),
            ));
        }
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("must be between 1 and {MAX_SCALE}"),
            ));
        }
        if self.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &self.columns,
                &"must be at least 1",
            ));
        }
        if self.padding > MAX_SHEET_PADDING {
            return Err(invalid_parameter(
                "padding",
                &self.padding,
                &format!("must be at most {MAX_SHEET_PADDING}"),
            ));
        }
        Ok(())
    }
}

/// Runs one CLI invocation: generate, optionally dump, export
pub struct SpriteProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl SpriteProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export according to CLI arguments
    ///
    /// Returns the path of the written image.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, mask loading, generation or export fails
    pub fn process(&self) -> Result<PathBuf> {
        self.cli.validate()?;

        let start_time = Instant::now();
        let mask = self.cli.mask()?;
        let options = self.cli.options();

        // a lone sprite keeps the bare seed so it matches `Sprite::new`
        let sprites = if self.cli.count == 1 {
            let sprite = Sprite::new(&mask, &options)?;
            self.progress_manager.advance();
            vec![sprite]
        } else {
            generate_batch_with(&mask, &options, self.cli.count, |_| {
                self.progress_manager.advance();
            })?
        };
        self.progress_manager.finish("done");

        if self.cli.dump {
            Self::print_dumps(&sprites);
        }

        let output_path = self.cli.output_path();
        match sprites.as_slice() {
            [sprite] => export_sprite_png(sprite, self.cli.scale, &output_path)?,
            _ => export_sprite_sheet(
                &sprites,
                self.cli.columns,
                self.cli.scale,
                self.cli.padding,
                &output_path,
            )?,
        }

        info!(
            sprites = sprites.len(),
            width = mask.effective_width(),
            height = mask.effective_height(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Wrote {}",
            output_path.display()
        );

        Ok(output_path)
    }

    /// Number of sprites finished so far
    pub fn completed(&self) -> u64 {
        self.progress_manager.position()
    }

    // Dumps are the requested output, not diagnostics
    #[allow(clippy::print_stdout)]
    fn print_dumps(sprites: &[Sprite]) {
        for (index, sprite) in sprites.iter().enumerate() {
            if sprites.len() > 1 {
                println!("# sprite {index}");
            }
            println!("{}", sprite.dump());
        }
    }
}
