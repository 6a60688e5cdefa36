//! steglens core - raster data structures
//!
//! This crate provides the data structures every other steglens crate
//! operates on:
//!
//! - [`Raster`] / [`RasterMut`] - 8-bit single-channel image (immutable / mutable)
//! - [`FRaster`] - floating-point image holding correlation intermediates
//! - [`RgbRaster`] - packed RGB(A) image used by the bit-plane and colour code
//! - [`Image`] - either of the two decoded image kinds
//!
//! Out-of-range coordinates are resolved by edge-clamp extension, see
//! [`Raster::sample_clamped`] and [`FRaster::sample_clamped`].

pub mod error;
pub mod fraster;
pub mod image;
pub mod raster;
pub mod rgb;

pub use error::{Error, Result};
pub use fraster::FRaster;
pub use image::Image;
pub use raster::{Raster, RasterMut};
pub use rgb::{RgbChannel, RgbRaster};

/// Largest valid sample value of an 8-bit raster.
pub const MAX_SAMPLE: u8 = 255;

/// Channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

}
