/// Command-line argument parsing and run orchestration
pub mod cli;
/// Default option values and runtime limits
pub mod configuration;
/// Error and warning types
pub mod error;
/// Sprite rendering, scaling and PNG export
pub mod image;
/// Mask file loading
pub mod mask_file;
/// Batch progress display
pub mod progress;
