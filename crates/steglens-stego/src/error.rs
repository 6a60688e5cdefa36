//! Error types for steglens-stego

use thiserror::Error;

/// Errors that can occur during bit-plane operations
#[derive(Debug, Error)]
pub enum StegoError {
    /// Requested bit count outside 1..=8
    #[error("invalid bit count: {0} (expected 1..=8)")]
    InvalidBitCount(u32),
}

/// Result type for bit-plane operations
pub type StegoResult<T> = Result<T, StegoError>;
