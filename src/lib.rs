//! Procedural generation of small symmetric pixel-art sprites from structural masks
//!
//! A mask marks every cell as border, empty or one of two randomized body
//! kinds. Generation samples the body cells from a seeded stream, mirrors the
//! template, grows borders around the body and colorizes the result along a
//! random gradient into an RGBA buffer.

#![forbid(unsafe_code)]

/// Generation pipeline: random source, options, sampling, colorization and batches
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color model utilities
pub mod math;
/// Masks, structural codes and the structural grid
pub mod spatial;

pub use algorithm::executor::Sprite;
pub use algorithm::options::{Options, Tint};
pub use io::error::{GenerationWarning, Result, SpriteError};
pub use spatial::{Mask, StructuralCode};
