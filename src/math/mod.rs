//! Mathematical utilities for colorization

/// Sprite color model and byte quantization
pub mod color;
