//! Loading text masks from disk

use std::path::Path;

use crate::io::configuration::MAX_MASK_DIMENSION;
use crate::io::error::{Result, SpriteError, invalid_parameter};
use crate::spatial::Mask;

/// Read and parse a mask file
///
/// The file holds one row per line of whitespace separated codes (`-1`, `0`,
/// `1`, `2`); `#` starts a comment line.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents are not a valid mask
/// - Either side exceeds `MAX_MASK_DIMENSION`
pub fn load_mask(path: &Path, mirror_x: bool, mirror_y: bool) -> Result<Mask> {
    let text = std::fs::read_to_string(path).map_err(|e| SpriteError::FileSystem {
        path: path.to_path_buf(),
        operation: "read mask",
        source: e,
    })?;

    let mask = Mask::parse(&text, mirror_x, mirror_y)?;
    if mask.width() > MAX_MASK_DIMENSION || mask.height() > MAX_MASK_DIMENSION {
        return Err(invalid_parameter(
            "mask",
            &format!("{}x{}", mask.width(), mask.height()),
            &format!("sides must not exceed {MAX_MASK_DIMENSION} cells"),
        ));
    }

    Ok(mask)
}
