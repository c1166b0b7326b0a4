/// Parallel batch generation
pub mod batch;
/// Gradient colorization into RGBA bytes
pub mod colorize;
/// Pipeline orchestration producing finished sprites
pub mod executor;
/// Generation options and tint
pub mod options;
/// Seeded random stream
pub mod random;
/// Per-cell structural sampling
pub mod sampling;
