//! Structural codes and the immutable mask template a sprite is generated from

use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, SpriteError};

/// Per-cell structural marker driving sampling, edge synthesis and colorization
///
/// Discriminants are the numeric codes used by mask files and the debug dump.
/// Ordering follows the numeric value, so `code >= StructuralCode::Empty`
/// selects every drawable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum StructuralCode {
    /// Always rendered as an edge pixel (`-1`)
    AlwaysBorder = -1,
    /// Never part of the sprite body (`0`)
    Empty = 0,
    /// Body cell that may be sampled away to empty (`1`)
    RandomlyEmptyBody = 1,
    /// Body cell that may be sampled into a border (`2`)
    RandomlyBorderBody = 2,
}

impl StructuralCode {
    /// Numeric value of the code
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Convert a numeric code back into a structural code
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::AlwaysBorder),
            0 => Some(Self::Empty),
            1 => Some(Self::RandomlyEmptyBody),
            2 => Some(Self::RandomlyBorderBody),
            _ => None,
        }
    }

    /// Body cells are everything that is neither a border nor empty
    pub const fn is_body(self) -> bool {
        matches!(self, Self::RandomlyEmptyBody | Self::RandomlyBorderBody)
    }
}

impl fmt::Display for StructuralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward to the integer so width/alignment flags apply
        fmt::Display::fmt(&self.value(), f)
    }
}

/// Immutable structural template plus mirroring flags
///
/// When a mirror flag is set, the mask describes only the left (or top) half
/// of the sprite; the other half is produced by mirroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    mirror_x: bool,
    mirror_y: bool,
    data: Vec<StructuralCode>,
}

impl Mask {
    /// Create a mask from row-major structural codes
    ///
    /// # Errors
    ///
    /// Returns `InvalidMask` if `data.len() != width * height`
    pub fn new(
        data: Vec<StructuralCode>,
        width: usize,
        height: usize,
        mirror_x: bool,
        mirror_y: bool,
    ) -> Result<Self> {
        let expected = width.checked_mul(height).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(SpriteError::InvalidMask {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            mirror_x,
            mirror_y,
            data,
        })
    }

    /// Create a mask from numeric codes (`-1`, `0`, `1`, `2`)
    ///
    /// # Errors
    ///
    /// Returns `MaskParse` for an unknown code and `InvalidMask` on a length mismatch
    pub fn from_values(
        values: &[i8],
        width: usize,
        height: usize,
        mirror_x: bool,
        mirror_y: bool,
    ) -> Result<Self> {
        let data = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                StructuralCode::from_value(value).ok_or_else(|| SpriteError::MaskParse {
                    line: if width == 0 { 1 } else { index / width + 1 },
                    reason: format!("unknown structural code {value}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(data, width, height, mirror_x, mirror_y)
    }

    /// Parse a text mask and attach mirror flags
    ///
    /// One grid row per line, whitespace separated codes. Blank lines and
    /// lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `MaskParse` for unknown tokens, ragged rows or an empty mask
    pub fn parse(text: &str, mirror_x: bool, mirror_y: bool) -> Result<Self> {
        let mut data = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_number = line_index + 1;
            let mut row_width = 0;
            for token in line.split_whitespace() {
                let code = token
                    .parse::<i8>()
                    .ok()
                    .and_then(StructuralCode::from_value)
                    .ok_or_else(|| SpriteError::MaskParse {
                        line: line_number,
                        reason: format!("'{token}' is not a structural code"),
                    })?;
                data.push(code);
                row_width += 1;
            }

            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(SpriteError::MaskParse {
                        line: line_number,
                        reason: format!("row has {row_width} cells, expected {expected}"),
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or_else(|| SpriteError::MaskParse {
            line: 0,
            reason: "mask contains no rows".to_string(),
        })?;

        Self::new(data, width, height, mirror_x, mirror_y)
    }

    /// Width of the template in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the template in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the template is mirrored horizontally
    pub const fn mirror_x(&self) -> bool {
        self.mirror_x
    }

    /// Whether the template is mirrored vertically
    pub const fn mirror_y(&self) -> bool {
        self.mirror_y
    }

    /// Row-major structural codes
    pub fn data(&self) -> &[StructuralCode] {
        &self.data
    }

    /// Width after mirroring
    pub const fn effective_width(&self) -> usize {
        if self.mirror_x {
            self.width * 2
        } else {
            self.width
        }
    }

    /// Height after mirroring
    pub const fn effective_height(&self) -> usize {
        if self.mirror_y {
            self.height * 2
        } else {
            self.height
        }
    }

    /// Same template with different mirror flags
    #[must_use]
    pub fn with_mirroring(mut self, mirror_x: bool, mirror_y: bool) -> Self {
        self.mirror_x = mirror_x;
        self.mirror_y = mirror_y;
        self
    }
}

impl FromStr for Mask {
    type Err = SpriteError;

    /// Parses an unmirrored mask; use [`Mask::with_mirroring`] to add flags
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, false, false)
    }
}
