//! Error and warning types for sprite generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sprite operations
#[derive(Debug)]
pub enum SpriteError {
    /// Mask data length does not match its declared dimensions
    InvalidMask {
        /// Declared width in cells
        width: usize,
        /// Declared height in cells
        height: usize,
        /// Expected number of codes (`width * height`)
        expected: usize,
        /// Number of codes supplied
        actual: usize,
    },

    /// Text mask could not be parsed
    MaskParse {
        /// 1-based line number (0 when the whole input is at fault)
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Export requested for zero sprites
    EmptyBatch,

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMask {
                width,
                height,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid mask: {width}x{height} needs {expected} cells, got {actual}"
                )
            }
            Self::MaskParse { line, reason } => {
                write!(f, "Mask parse error on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyBatch => write!(f, "No sprites to export"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sprite results
pub type Result<T> = std::result::Result<T, SpriteError>;

impl From<image::ImageError> for SpriteError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SpriteError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SpriteError {
    SpriteError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (columns)
    X,
    /// Vertical (rows)
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Non-fatal condition surfaced to the caller; generation still completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationWarning {
    /// A mirrored axis has odd length, so the halves split unevenly
    OddMirrorAxis {
        /// Axis being mirrored
        axis: Axis,
        /// Length of that axis in cells
        length: usize,
    },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddMirrorAxis { axis, length } => write!(
                f,
                "Mirroring along {axis} with odd length {length}; the middle line is not mirrored"
            ),
        }
    }
}
