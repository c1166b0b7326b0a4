//! Built-in masks for common sprite shapes

use crate::io::error::Result;
use crate::spatial::mask::Mask;

/// Named built-in masks selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// 6x12 half-hull, mirrored horizontally
    Spaceship,
    /// 12x12 side-on creature, unmirrored
    Dragon,
    /// 4x11 half-body, mirrored horizontally
    Robot,
}

#[rustfmt::skip]
const SPACESHIP: [i8; 72] = [
    0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1,
    0, 0, 0, 0, 1,-1,
    0, 0, 0, 1, 1,-1,
    0, 0, 0, 1, 1,-1,
    0, 0, 1, 1, 1,-1,
    0, 1, 1, 1, 2, 2,
    0, 1, 1, 1, 2, 2,
    0, 1, 1, 1, 2, 2,
    0, 1, 1, 1, 1,-1,
    0, 0, 0, 1, 1, 1,
    0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
const DRAGON: [i8; 144] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 2, 2, 1, 1, 0, 0, 0,
    0, 0, 1, 1, 1, 2, 2, 1, 1, 1, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0,
    0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
const ROBOT: [i8; 44] = [
    0, 0, 0, 0,
    0, 1, 1, 1,
    0, 1, 2, 2,
    0, 0, 1, 2,
    0, 0, 0, 2,
    1, 1, 1, 2,
    0, 1, 1, 2,
    0, 0, 0, 2,
    0, 0, 0, 2,
    0, 1, 2, 2,
    1, 1, 0, 0,
];

impl Preset {
    /// Build the mask for this preset
    ///
    /// # Errors
    ///
    /// Never fails for the built-in tables; the `Result` mirrors `Mask::from_values`
    pub fn mask(self) -> Result<Mask> {
        match self {
            Self::Spaceship => Mask::from_values(&SPACESHIP, 6, 12, true, false),
            Self::Dragon => Mask::from_values(&DRAGON, 12, 12, false, false),
            Self::Robot => Mask::from_values(&ROBOT, 4, 11, true, false),
        }
    }

    /// Lowercase preset name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spaceship => "spaceship",
            Self::Dragon => "dragon",
            Self::Robot => "robot",
        }
    }

    /// Every preset, in declaration order
    pub const fn all() -> [Self; 3] {
        [Self::Spaceship, Self::Dragon, Self::Robot]
    }
}
