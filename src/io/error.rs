//! Error types for grid construction, tilemap loading and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all cover operations
#[derive(Debug)]
pub enum CoverError {
    /// Failed to load a tilemap image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Occupancy data doesn't match its declared region
    ///
    /// Raised when the declared width and height disagree with the number
    /// of cells supplied, or when a text tilemap is malformed.
    InvalidSourceData {
        /// Description of what's wrong with the source data
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

    /// Failed to save a rendered cover image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A generated cover broke one of its invariants
    InvalidCover {
        /// Tilemap the cover was generated for
        path: PathBuf,
        /// Occupied cells left uncovered
        uncovered: usize,
        /// Empty cells claimed by a rectangle
        spurious: usize,
        /// Cells claimed twice where overlap is not allowed
        overlapping: usize,
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

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidCover {
                path,
                uncovered,
                spurious,
                overlapping,
            } => {
                write!(
                    f,
                    "Invalid cover for '{}': {uncovered} uncovered, {spurious} spurious, {overlapping} overlapping cells",
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

impl std::error::Error for CoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for cover results
pub type Result<T> = std::result::Result<T, CoverError>;

impl From<std::io::Error> for CoverError {
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
) -> CoverError {
    CoverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> CoverError {
    CoverError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O failure with the path and operation that produced it
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> CoverError {
    let path = path.into();
    move |source| CoverError::FileSystem {
        path,
        operation,
        source,
    }
}
