//! Error types for steglens-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] steglens_core::Error),

    /// Name that does not match any colour deficiency
    #[error("unknown colour deficiency: {0:?} (expected red, green, blue or none)")]
    UnknownDeficiency(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
