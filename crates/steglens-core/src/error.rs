//! Error types for steglens-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant is raised at construction time; sampling, normalisation
//! and the per-pixel maps never fail.

use thiserror::Error;

/// steglens core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Sample buffer does not hold exactly `width * height` values
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Coordinates outside the image
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two images that must share a shape do not
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validate a `width x height` shape against a buffer length.
pub(crate) fn check_shape(width: u32, height: u32, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let expected = (width as usize) * (height as usize);
    if len != expected {
        return Err(Error::DataLengthMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}
