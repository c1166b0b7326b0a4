//! Structural sampling: the per-cell callback applied over the whole grid

use std::fmt;
use std::sync::Arc;

use crate::algorithm::random::RandomSource;
use crate::spatial::{StructuralCode, StructuralGrid};

/// Signature of a user-supplied sampler
///
/// Receives the cell position, its current code and the generation's random
/// source; returns the replacement code.
pub type SampleFn =
    dyn Fn(usize, usize, StructuralCode, &mut RandomSource) -> StructuralCode + Send + Sync;

/// Callback deciding the sampled value of every cell
#[derive(Clone, Default)]
pub enum SampleCallback {
    /// Coin flips on body cells, everything else untouched
    #[default]
    Default,
    /// Returns every cell unchanged without drawing
    Identity,
    /// Caller-provided function; invoked as-is for every cell
    Custom(Arc<SampleFn>),
}

impl SampleCallback {
    /// Wrap a closure as a custom sampler
    pub fn custom<F>(sampler: F) -> Self
    where
        F: Fn(usize, usize, StructuralCode, &mut RandomSource) -> StructuralCode
            + Send
            + Sync
            + 'static,
    {
        Self::Custom(Arc::new(sampler))
    }

    /// Sampled value for one cell
    pub fn sample(
        &self,
        x: usize,
        y: usize,
        code: StructuralCode,
        random: &mut RandomSource,
    ) -> StructuralCode {
        match self {
            Self::Default => default_sample(code, random),
            Self::Identity => code,
            Self::Custom(sampler) => sampler(x, y, code, random),
        }
    }
}

impl fmt::Debug for SampleCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Identity => write!(f, "Identity"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Default sampling policy
///
/// `RandomlyEmptyBody` survives when `round(draw)` is 1 and becomes `Empty`
/// otherwise. `RandomlyBorderBody` becomes `RandomlyEmptyBody` when the draw
/// exceeds one half and `AlwaysBorder` otherwise. One draw per body cell, none
/// for any other code.
pub fn default_sample(code: StructuralCode, random: &mut RandomSource) -> StructuralCode {
    match code {
        StructuralCode::RandomlyEmptyBody => {
            if random.next_f64().round() >= 1.0 {
                StructuralCode::RandomlyEmptyBody
            } else {
                StructuralCode::Empty
            }
        }
        StructuralCode::RandomlyBorderBody => {
            if random.next_f64() > 0.5 {
                StructuralCode::RandomlyEmptyBody
            } else {
                StructuralCode::AlwaysBorder
            }
        }
        StructuralCode::AlwaysBorder | StructuralCode::Empty => code,
    }
}

/// Replace every cell of the grid with its sampled value, row-major
pub fn sample_grid(
    grid: &mut StructuralGrid,
    callback: &SampleCallback,
    random: &mut RandomSource,
) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if let Some(code) = grid.get(x, y) {
                let sampled = callback.sample(x, y, code, random);
                grid.set(x, y, sampled);
            }
        }
    }
}
