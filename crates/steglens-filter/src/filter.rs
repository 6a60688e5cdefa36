//! Closed set of named filters
//!
//! `Filter` lets callers pick a transformation at runtime (for example
//! from a command-line argument) without string dispatch.

use crate::{FilterResult, blurred, edges, inverted, sharpened};
use steglens_core::Raster;

/// A spatial filter and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Photographic negative
    Invert,
    /// Box blur with the given kernel side
    Blur(u32),
    /// Unsharp sharpening with the given (odd) kernel side
    Sharpen(u32),
    /// Sobel gradient magnitude
    Edges,
}

impl Filter {
    /// Apply the filter, producing a new raster of the same size.
    pub fn apply(&self, raster: &Raster) -> FilterResult<Raster> {
        match *self {
            Filter::Invert => Ok(inverted(raster)),
            Filter::Blur(side) => blurred(raster, side),
            Filter::Sharpen(side) => sharpened(raster, side),
            Filter::Edges => edges(raster),
        }
    }

    /// Short lowercase name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Invert => "invert",
            Filter::Blur(_) => "blur",
            Filter::Sharpen(_) => "sharpen",
            Filter::Edges => "edges",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatch() {
        let raster = Raster::from_data(3, 3, vec![10, 10, 10, 10, 100, 10, 10, 10, 10]).unwrap();
        assert_eq!(Filter::Invert.apply(&raster).unwrap(), inverted(&raster));
        assert_eq!(Filter::Blur(3).apply(&raster).unwrap().data(), &[20; 9]);
        assert_eq!(
            Filter::Sharpen(3).apply(&raster).unwrap().data(),
            &[0, 0, 0, 0, 180, 0, 0, 0, 0]
        );
        assert_eq!(
            Filter::Edges.apply(&raster).unwrap().get_sample(1, 0),
            Some(180)
        );
    }

    #[test]
    fn test_apply_invalid_side() {
        let raster = Raster::new(2, 2).unwrap();
        assert!(Filter::Blur(0).apply(&raster).is_err());
        assert!(Filter::Sharpen(2).apply(&raster).is_err());
    }
}
