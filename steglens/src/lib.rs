//! steglens - grayscale kernel filters and bit-plane reveal
//!
//! # Overview
//!
//! - Edge-clamped N x N kernel correlation: box blur, unsharp sharpening,
//!   Sobel edge magnitude, plus a photographic negative
//! - Extraction of low bit planes and reveal of images hidden in them
//! - PNG / PNM file I/O, luma reduction and colour-deficiency simulation
//!
//! # Example
//!
//! ```
//! use steglens::Raster;
//! use steglens::filter::{Filter, blurred};
//!
//! let raster = Raster::from_data(3, 3, vec![10, 10, 10, 10, 100, 10, 10, 10, 10]).unwrap();
//! assert!(blurred(&raster, 3).unwrap().data().iter().all(|&v| v == 20));
//! assert_eq!(Filter::Invert.apply(&raster).unwrap().get_sample(1, 1), Some(155));
//! ```

pub mod cli;

// Re-export core types (primary data structures used everywhere)
pub use steglens_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use steglens_color as color;
pub use steglens_filter as filter;
pub use steglens_io as io;
pub use steglens_stego as stego;
