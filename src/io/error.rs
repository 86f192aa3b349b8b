//! Error types for grid editing, documents and edit scripts

use std::fmt;
use std::path::PathBuf;

/// Grid axis named in dimension errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal extent (columns)
    Width,
    /// Vertical extent (rows)
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Main error type for all editing operations
#[derive(Debug)]
pub enum EditorError {
    /// Requested grid dimension is outside the supported range
    InvalidDimension {
        /// Which dimension was rejected
        axis: Axis,
        /// Requested value
        value: usize,
    },

    /// Coordinate or flat index outside the current grid
    ///
    /// Flat indices are reported through the row/column they would map to,
    /// so an index past the end shows up with `row >= height`.
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid width at the time of the request
        width: usize,
        /// Grid height at the time of the request
        height: usize,
    },

    /// Color text could not be parsed
    InvalidColor {
        /// Text that failed to parse
        value: String,
        /// Explanation of why parsing failed
        reason: &'static str,
    },

    /// Palette would leave its allowed length range
    PaletteSize {
        /// Length the operation would have produced
        requested: usize,
    },

    /// Palette square index does not exist
    PaletteIndex {
        /// The invalid square index
        index: usize,
        /// Current palette length
        len: usize,
    },

    /// Serialized art document is internally inconsistent
    InvalidDocument {
        /// Description of what's wrong with the document
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

    /// An edit intent failed while replaying a script
    Replay {
        /// Zero-based position of the failing intent
        step: usize,
        /// Error raised by the intent
        source: Box<EditorError>,
    },

    /// Edit script or document could not be decoded or encoded
    Script {
        /// File involved
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
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

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(
                    f,
                    "Invalid {axis} {value}: must be between {} and {}",
                    crate::io::configuration::MIN_DIMENSION,
                    crate::io::configuration::MAX_DIMENSION
                )
            }
            Self::OutOfBounds {
                row,
                col,
                width,
                height,
            } => {
                write!(
                    f,
                    "Cell (row {row}, col {col}) is outside the {width}x{height} grid"
                )
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::PaletteSize { requested } => {
                write!(
                    f,
                    "Palette of {requested} squares is not allowed (range {}..={})",
                    crate::io::configuration::MIN_PALETTE_LEN,
                    crate::io::configuration::MAX_PALETTE_LEN
                )
            }
            Self::PaletteIndex { index, len } => {
                write!(f, "Palette square {index} is out of bounds (len: {len})")
            }
            Self::InvalidDocument { reason } => {
                write!(f, "Invalid art document: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Replay { step, source } => {
                write!(f, "Edit {step} failed: {source}")
            }
            Self::Script { path, source } => {
                write!(f, "Failed to process '{}': {source}", path.display())
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

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Replay { source, .. } => Some(source.as_ref()),
            Self::Script { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editing results
pub type Result<T> = std::result::Result<T, EditorError>;

impl From<std::io::Error> for EditorError {
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
) -> EditorError {
    EditorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid document error
pub fn invalid_document(reason: &impl ToString) -> EditorError {
    EditorError::InvalidDocument {
        reason: reason.to_string(),
    }
}
