//! Hidden-image reveal
//!
//! Stretches low bit planes back to a visible range:
//!
//! - grey: the LSB plane times 252 (so 0 or 252)
//! - colour: each channel's two low bits times `255 / 3`, truncated
//!   (`0, 1, 2, 3 -> 0, 85, 170, 255`)

use crate::{low_two_bits, lsb_plane};
use log::debug;
use steglens_core::{Image, Raster, RgbRaster};

/// Scale applied to a revealed single-bit grey plane.
pub const GRAY_REVEAL_SCALE: u8 = 252;

/// Reveal an image hidden in the least-significant bits of a grey raster.
pub fn reveal_gray(raster: &Raster) -> Raster {
    debug!("reveal_gray: {}x{}", raster.width(), raster.height());
    lsb_plane(raster).map(|bit| bit * GRAY_REVEAL_SCALE)
}

/// Reveal an image hidden in the two low bits of each colour channel.
pub fn reveal_rgb(rgb: &RgbRaster) -> RgbRaster {
    debug!("reveal_rgb: {}x{}", rgb.width(), rgb.height());
    low_two_bits(rgb).map_channels(stretch_two_bits)
}

/// Reveal whichever kind of image was decoded.
pub fn reveal(image: &Image) -> Image {
    match image {
        Image::Gray(raster) => Image::Gray(reveal_gray(raster)),
        Image::Rgb(rgb) => Image::Rgb(reveal_rgb(rgb)),
    }
}

/// `int(v * 255 / 3)` for a two-bit value.
#[inline]
fn stretch_two_bits(v: u8) -> u8 {
    (f64::from(v) * 255.0 / 3.0).trunc() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_gray() {
        let raster = Raster::from_data(4, 1, vec![5, 4, 1, 254]).unwrap();
        assert_eq!(reveal_gray(&raster).data(), &[252, 0, 252, 0]);
    }

    #[test]
    fn test_stretch_two_bits() {
        assert_eq!(stretch_two_bits(0), 0);
        assert_eq!(stretch_two_bits(1), 85);
        assert_eq!(stretch_two_bits(2), 170);
        assert_eq!(stretch_two_bits(3), 255);
    }

    #[test]
    fn test_reveal_rgb() {
        let rgb = RgbRaster::from_rgb(2, 1, &[(5, 6, 7), (8, 9, 10)]).unwrap();
        let out = reveal_rgb(&rgb);
        assert_eq!(out.get_rgb(0, 0), Some((85, 170, 255)));
        assert_eq!(out.get_rgb(1, 0), Some((0, 85, 170)));
    }

    #[test]
    fn test_reveal_dispatch() {
        let gray = Raster::from_data(1, 1, vec![3]).unwrap();
        assert_eq!(
            reveal(&Image::Gray(gray)),
            Image::Gray(Raster::from_data(1, 1, vec![252]).unwrap())
        );
        let rgb = RgbRaster::from_rgb(1, 1, &[(3, 2, 1)]).unwrap();
        let Image::Rgb(out) = reveal(&Image::Rgb(rgb)) else {
            panic!("expected a colour image");
        };
        assert_eq!(out.get_rgb(0, 0), Some((255, 170, 85)));
    }
}
