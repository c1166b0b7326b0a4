//! Spatial data structures for sprite structure
//!
//! This module contains the structural side of generation:
//! - Structural codes and mask templates
//! - The mutable effective-size grid with mirroring and edge synthesis
//! - Built-in preset masks

/// Structural grid storage, mirroring, edge synthesis and debug dump
pub mod grid;
/// Structural codes and mask templates
pub mod mask;
/// Built-in masks
pub mod presets;

pub use grid::StructuralGrid;
pub use mask::{Mask, StructuralCode};
pub use presets::Preset;
