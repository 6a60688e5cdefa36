//! Decoded image kinds
//!
//! A decoder yields either a single-channel [`Raster`] or a packed
//! [`RgbRaster`]. Operations that behave differently per kind (such as
//! revealing a hidden bit plane) match on this enum instead of taking a
//! mode string.

use crate::raster::Raster;
use crate::rgb::RgbRaster;

/// A grayscale or colour image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    /// Single-channel 8-bit image
    Gray(Raster),
    /// Packed RGB(A) image
    Rgb(RgbRaster),
}

impl Image {
    /// Get the image width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Image::Gray(r) => r.width(),
            Image::Rgb(r) => r.width(),
        }
    }

    /// Get the image height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Image::Gray(r) => r.height(),
            Image::Rgb(r) => r.height(),
        }
    }

    /// Number of colour channels (1 or 3).
    pub fn channels(&self) -> u32 {
        match self {
            Image::Gray(_) => 1,
            Image::Rgb(_) => 3,
        }
    }
}

impl From<Raster> for Image {
    fn from(raster: Raster) -> Self {
        Image::Gray(raster)
    }
}

impl From<RgbRaster> for Image {
    fn from(rgb: RgbRaster) -> Self {
        Image::Rgb(rgb)
    }
}
