//! Generation defaults and runtime configuration limits

// Colorization defaults, applied field by field by `Options::default`
/// Multiplier applied to border pixels in colored mode
pub const DEFAULT_EDGE_BRIGHTNESS: f64 = 0.3;
/// Likelihood threshold for picking a new hue along the gradient axis
pub const DEFAULT_COLOR_VARIATIONS: f64 = 0.2;
/// Share of brightness driven by noise instead of the gradient
pub const DEFAULT_BRIGHTNESS_NOISE: f64 = 0.3;
/// Upper bound for the randomly drawn saturation
pub const DEFAULT_SATURATION: f64 = 0.5;

// Debug dump layout
/// Column width of a single code in the structural dump
pub const DUMP_CELL_WIDTH: usize = 3;

// Safety limits for command-line input
/// Largest accepted mask side in cells
pub const MAX_MASK_DIMENSION: usize = 64;
/// Largest accepted pixel scale factor
pub const MAX_SCALE: u32 = 64;
/// Largest number of sprites generated in one run
pub const MAX_BATCH_COUNT: usize = 4096;
/// Largest accepted gap between sprite sheet cells
pub const MAX_SHEET_PADDING: u32 = 64;
/// Largest side of any exported image, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Default values for configurable parameters
/// Sprites generated per run
pub const DEFAULT_COUNT: usize = 1;
/// Pixel scale factor for exported images
pub const DEFAULT_SCALE: u32 = 8;
/// Sprites per row in a sprite sheet
pub const DEFAULT_SHEET_COLUMNS: usize = 8;
/// Transparent gap between sheet cells, in unscaled sprite pixels
pub const DEFAULT_SHEET_PADDING: u32 = 1;

// Output settings
/// Default output file stem
pub const DEFAULT_OUTPUT_STEM: &str = "sprite";
/// Output file extension
pub const OUTPUT_EXTENSION: &str = "png";
