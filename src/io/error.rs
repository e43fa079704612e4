//! Error types for plate generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all plate generation operations
#[derive(Debug)]
pub enum PlateError {
    /// Failed to load the mask image from the filesystem
    ImageLoad {
        /// Path to the mask file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rendered plate to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Mask file is not in a supported format
    ///
    /// Masks must be PNG files; the extension is checked before loading.
    UnsupportedFormat {
        /// Path to the rejected file
        path: PathBuf,
    },

    /// Mask content cannot drive plate generation
    InvalidMask {
        /// Description of what's wrong with the mask
        reason: String,
    },

    /// Configuration parameter validation failed
    ///
    /// All numeric orderings and color specifications are validated before
    /// the packing core runs; the core itself assumes a valid config.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

impl fmt::Display for PlateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load mask '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export plate to '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path } => {
                write!(f, "Mask '{}' is not a PNG image", path.display())
            }
            Self::InvalidMask { reason } => {
                write!(f, "Invalid mask: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for PlateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<image::ImageError> for PlateError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PlateError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for plate generation results
pub type Result<T> = std::result::Result<T, PlateError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlateError {
    PlateError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a target path error
pub fn path_error(msg: &str) -> PlateError {
    PlateError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("wall_radius", &500.0, &"must be smaller than half the width");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'wall_radius' = '500': must be smaller than half the width"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = PlateError::UnsupportedFormat {
            path: PathBuf::from("mask.jpg"),
        };
        assert_eq!(err.to_string(), "Mask 'mask.jpg' is not a PNG image");
    }
}
