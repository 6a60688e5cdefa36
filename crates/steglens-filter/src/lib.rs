//! steglens-filter - Kernel correlation and spatial filters
//!
//! This crate provides:
//!
//! - Square correlation kernels (box blur, identity, unsharp, Sobel)
//! - Row-parallel correlation with edge-clamp borders
//! - Filters built on top: invert, blur, sharpen, Sobel edge magnitude
//!
//! Correlation produces an unclipped [`steglens_core::FRaster`]; each
//! filter normalises it back to a [`steglens_core::Raster`] exactly once.

pub mod correlate;
pub mod edge;
pub mod enhance;
mod error;
pub mod filter;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use correlate::{correlate, correlate_fraster};
pub use edge::edges;
pub use enhance::{blurred, inverted, sharpened};
pub use filter::Filter;
