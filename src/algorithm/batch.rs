//! Parallel generation of independent sprites from one mask
//!
//! Each sprite owns its grid and random source, so generations run on the
//! rayon pool with no shared mutable state. Seeded batches derive one seed per
//! sprite and are reproducible regardless of scheduling.

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::algorithm::executor::Sprite;
use crate::algorithm::options::Options;
use crate::algorithm::random::RandomSource;
use crate::io::error::Result;
use crate::spatial::Mask;

/// Seed used for sprite `index` of a batch
pub fn sprite_seed(base: &str, index: usize) -> String {
    format!("{base}-{index}")
}

/// Generate `count` sprites in parallel, in index order
///
/// # Errors
///
/// Returns the first generation error encountered
pub fn generate_batch(mask: &Mask, options: &Options, count: usize) -> Result<Vec<Sprite>> {
    generate_batch_with(mask, options, count, |_| {})
}

/// Generate `count` sprites, invoking `on_complete` from worker threads as each finishes
///
/// # Errors
///
/// Returns the first generation error encountered
pub fn generate_batch_with<F>(
    mask: &Mask,
    options: &Options,
    count: usize,
    on_complete: F,
) -> Result<Vec<Sprite>>
where
    F: Fn(usize) + Send + Sync,
{
    (0..count)
        .into_par_iter()
        .map(|index| {
            let random = options.seed.as_deref().map_or_else(RandomSource::from_entropy, |seed| {
                RandomSource::from_seed(&sprite_seed(seed, index))
            });
            let sprite = Sprite::with_random(mask, options, random);
            on_complete(index);
            sprite
        })
        .collect()
}
