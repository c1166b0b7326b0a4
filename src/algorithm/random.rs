//! Seeded pseudorandom stream shared by every stage of one generation

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Sequential source of floats in `[0, 1)`
///
/// Owned by a single generation. Stages draw from it in a fixed order, so the
/// number of draws each stage makes is part of the output contract.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    draws: u64,
}

impl RandomSource {
    /// Deterministic source; equal seeds always produce equal streams
    pub fn from_seed(seed: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(hash_seed(seed)),
            draws: 0,
        }
    }

    /// Non-reproducible source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            draws: 0,
        }
    }

    /// Seeded when a seed is given, otherwise from entropy
    pub fn new(seed: Option<&str>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Next float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        self.rng.random::<f64>()
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

/// Stable 64-bit digest of a textual seed
///
/// SipHash-2-4 with fixed zero keys, so the digest does not change across
/// processes, platforms or toolchain versions.
pub fn hash_seed(seed: &str) -> u64 {
    let mut hasher = siphasher::sip::SipHasher::new();
    seed.hash(&mut hasher);
    hasher.finish()
}
