//! Colour to luma reduction
//!
//! Uses the ITU-R BT.601 weights. The weighted sum is rounded to the
//! nearest integer with ties going to the even neighbour.

use crate::ColorResult;
use log::debug;
use steglens_core::{Image, Raster, RasterMut, RgbRaster, color};

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = round(0.299*R + 0.587*G + 0.114*B)
///
/// # Examples
///
/// ```
/// use steglens_color::rgb_to_gray;
///
/// assert_eq!(rgb_to_gray(255, 0, 0), 76);
/// assert_eq!(rgb_to_gray(0, 255, 0), 150);
/// assert_eq!(rgb_to_gray(9, 9, 9), 9);
/// ```
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    luma.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Reduce a colour image to an 8-bit luma raster.
///
/// Alpha is ignored. A grey image stored as RGB (equal channels) maps
/// back to its grey values exactly.
pub fn convert_to_gray(rgb: &RgbRaster) -> ColorResult<Raster> {
    debug!("convert_to_gray: {}x{}", rgb.width(), rgb.height());
    let mut out = RasterMut::new(rgb.width(), rgb.height())?;
    for (dst, &pixel) in out.data_mut().iter_mut().zip(rgb.data()) {
        let (r, g, b) = color::extract_rgb(pixel);
        *dst = rgb_to_gray(r, g, b);
    }
    Ok(out.into())
}

/// Reduce any decoded image to a grayscale raster.
///
/// Grey images pass through unchanged (a cheap shared clone).
pub fn image_to_gray(image: &Image) -> ColorResult<Raster> {
    match image {
        Image::Gray(raster) => Ok(raster.clone()),
        Image::Rgb(rgb) => convert_to_gray(rgb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_gray_weights() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(0, 0, 255), 29);
        assert_eq!(rgb_to_gray(10, 20, 30), 18);
        assert_eq!(rgb_to_gray(200, 100, 50), 124);
        assert_eq!(rgb_to_gray(1, 2, 3), 2);
    }

    #[test]
    fn test_equal_channels_pass_through() {
        for v in 0..=255u8 {
            assert_eq!(rgb_to_gray(v, v, v), v);
        }
    }

    #[test]
    fn test_convert_to_gray() {
        let rgb = RgbRaster::from_rgb(3, 1, &[(255, 0, 0), (0, 255, 0), (7, 7, 7)]).unwrap();
        let gray = convert_to_gray(&rgb).unwrap();
        assert_eq!(gray.dimensions(), (3, 1));
        assert_eq!(gray.data(), &[76, 150, 7]);
    }

    #[test]
    fn test_image_to_gray_shares_gray() {
        let raster = Raster::from_data(2, 1, vec![3, 4]).unwrap();
        let out = image_to_gray(&Image::Gray(raster.clone())).unwrap();
        assert_eq!(out, raster);
        assert_eq!(raster.ref_count(), 2);
    }
}
