//! Error types for sprite loading, mosaic generation and animation export

use std::fmt;
use std::path::PathBuf;

/// Broad failure class a [`MosaicError`] belongs to
///
/// Lets callers tell asset, input and export failures apart without
/// matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A sprite asset is missing, corrupt or inconsistent with the set
    Asset,
    /// The input image cannot be decoded or has no pixels
    Input,
    /// The animation could not be serialized or written
    Export,
    /// A caller-supplied parameter is out of range
    Parameter,
}

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode one of the sprite frames
    AssetLoad {
        /// Path to the sprite file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Sprite frames decoded but do not form a usable set
    InvalidSpriteSet {
        /// Description of what's wrong with the set
        reason: String,
    },

    /// Failed to decode the input image
    InputLoad {
        /// Path to the input image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Input image decoded but cannot be turned into a cell grid
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Failed to encode or write the animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Export was asked to write an animation with no frames
    EmptySequence {
        /// Path where export was attempted
        path: PathBuf,
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl MosaicError {
    /// Classify this error into one of the broad failure kinds
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AssetLoad { .. } | Self::InvalidSpriteSet { .. } => ErrorKind::Asset,
            Self::InputLoad { .. } | Self::InvalidInput { .. } => ErrorKind::Input,
            Self::ImageExport { .. } | Self::EmptySequence { .. } | Self::FileSystem { .. } => {
                ErrorKind::Export
            }
            Self::InvalidParameter { .. } => ErrorKind::Parameter,
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load sprite '{}': {source}", path.display())
            }
            Self::InvalidSpriteSet { reason } => {
                write!(f, "Invalid sprite set: {reason}")
            }
            Self::InputLoad { path, source } => {
                write!(
                    f,
                    "Failed to load input image '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input image: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::EmptySequence { path } => {
                write!(
                    f,
                    "Refusing to export an empty frame sequence to '{}'",
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. }
            | Self::InputLoad { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid sprite set error
pub fn invalid_sprite_set(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidSpriteSet {
        reason: reason.to_string(),
    }
}
