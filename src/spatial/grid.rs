//! Mutable structural grid sized to the effective (post-mirror) sprite dimensions
//!
//! Every generation owns exactly one grid. Stages mutate it in place: the mask
//! is copied into the top-left corner, sampling rewrites cells, mirroring
//! overwrites the far half of an axis and edge synthesis grows borders around
//! body cells in a single directional pass.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::DUMP_CELL_WIDTH;
use crate::io::error::{Axis, GenerationWarning, Result, SpriteError};
use crate::spatial::mask::{Mask, StructuralCode};

/// Row-major grid of structural codes indexed by `(x, y)`
///
/// Storage is an `ndarray` matrix indexed `[row, col]`, i.e. `[y, x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralGrid {
    cells: Array2<StructuralCode>,
}

impl StructuralGrid {
    /// Create a grid with every cell set to `AlwaysBorder`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), StructuralCode::AlwaysBorder),
        }
    }

    /// Create a grid sized to the mask's effective dimensions
    pub fn for_mask(mask: &Mask) -> Self {
        Self::new(mask.effective_width(), mask.effective_height())
    }

    /// Build a grid from row-major codes
    ///
    /// # Errors
    ///
    /// Returns `InvalidMask` if `codes.len() != width * height`
    pub fn from_codes(codes: Vec<StructuralCode>, width: usize, height: usize) -> Result<Self> {
        let actual = codes.len();
        Array2::from_shape_vec((height, width), codes)
            .map(|cells| Self { cells })
            .map_err(|_shape_error| SpriteError::InvalidMask {
                width,
                height,
                expected: width.saturating_mul(height),
                actual,
            })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Code at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<StructuralCode> {
        self.cells.get([y, x]).copied()
    }

    /// Overwrite the code at column `x`, row `y`
    ///
    /// Returns `false` when the position lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, code: StructuralCode) -> bool {
        self.cells.get_mut([y, x]).map(|cell| *cell = code).is_some()
    }

    /// Row-major copy of all codes
    pub fn codes(&self) -> Vec<StructuralCode> {
        self.cells.iter().copied().collect()
    }

    /// Copy the mask template into the top-left corner
    ///
    /// Cells outside the template keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the template does not fit inside the grid
    pub fn apply_mask(&mut self, mask: &Mask) -> Result<()> {
        if mask.width() > self.width() || mask.height() > self.height() {
            return Err(crate::io::error::invalid_parameter(
                "mask",
                &format!("{}x{}", mask.width(), mask.height()),
                &format!("does not fit a {}x{} grid", self.width(), self.height()),
            ));
        }

        if mask.width() == 0 {
            return Ok(());
        }

        for (index, &code) in mask.data().iter().enumerate() {
            let x = index % mask.width();
            let y = index / mask.width();
            self.set(x, y, code);
        }

        Ok(())
    }

    /// Copy the left half of every row onto the right half
    ///
    /// Column `x` overwrites column `width - 1 - x` for `x < width / 2`. An odd
    /// width leaves the middle column untouched and is reported as a warning.
    pub fn mirror_x(&mut self) -> Option<GenerationWarning> {
        let width = self.width();
        for y in 0..self.height() {
            for x in 0..width / 2 {
                if let Some(code) = self.get(x, y) {
                    self.set(width - 1 - x, y, code);
                }
            }
        }

        (width % 2 == 1).then_some(GenerationWarning::OddMirrorAxis {
            axis: Axis::X,
            length: width,
        })
    }

    /// Copy the top half of every column onto the bottom half
    ///
    /// Row `y` overwrites row `height - 1 - y` for `y < height / 2`. An odd
    /// height leaves the middle row untouched and is reported as a warning.
    pub fn mirror_y(&mut self) -> Option<GenerationWarning> {
        let height = self.height();
        for y in 0..height / 2 {
            for x in 0..self.width() {
                if let Some(code) = self.get(x, y) {
                    self.set(x, height - 1 - y, code);
                }
            }
        }

        (height % 2 == 1).then_some(GenerationWarning::OddMirrorAxis {
            axis: Axis::Y,
            length: height,
        })
    }

    /// Surround body cells with borders wherever a neighbour is empty
    ///
    /// Single in-place pass, top-to-bottom then left-to-right. Neighbours are
    /// visited up, down, left, right. Writes made while visiting a cell are
    /// seen by every cell visited after it.
    pub fn synthesize_edges(&mut self) {
        let width = self.width();
        let height = self.height();

        for y in 0..height {
            for x in 0..width {
                if !self.get(x, y).is_some_and(StructuralCode::is_body) {
                    continue;
                }

                let neighbours = [
                    y.checked_sub(1).map(|ny| (x, ny)),
                    (y + 1 < height).then_some((x, y + 1)),
                    x.checked_sub(1).map(|nx| (nx, y)),
                    (x + 1 < width).then_some((x + 1, y)),
                ];

                for (nx, ny) in neighbours.into_iter().flatten() {
                    if self.get(nx, ny) == Some(StructuralCode::Empty) {
                        self.set(nx, ny, StructuralCode::AlwaysBorder);
                    }
                }
            }
        }
    }
}

impl fmt::Display for StructuralGrid {
    /// Debug dump: one line per row, every code left-aligned in a fixed-width column
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.rows().into_iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for code in row {
                write!(f, "{code:<DUMP_CELL_WIDTH$}")?;
            }
        }
        Ok(())
    }
}
