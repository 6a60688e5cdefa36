//! Normalisation of floating-point intermediates
//!
//! Correlation output can be negative, above 255, fractional or NaN.
//! `clip_and_round` is the single place where such values become valid
//! 8-bit samples again.
//!
//! # Rounding policy
//!
//! Values are rounded to the nearest integer with ties going to the even
//! neighbour (`0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`), then clamped to
//! `[0, 255]`. NaN maps to 0.

use super::FRaster;
use crate::MAX_SAMPLE;
use crate::raster::Raster;

/// Round and clamp one floating value into a valid sample.
///
/// # Examples
///
/// ```
/// use steglens_core::fraster::normalize::clip_sample;
///
/// assert_eq!(clip_sample(254.5), 254);
/// assert_eq!(clip_sample(255.5), 255);
/// assert_eq!(clip_sample(-0.5), 0);
/// assert_eq!(clip_sample(f64::NAN), 0);
/// ```
#[inline]
pub fn clip_sample(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round_ties_even().clamp(0.0, f64::from(MAX_SAMPLE)) as u8
}

impl FRaster {
    /// Round every sample to the nearest integer (ties to even) and clamp
    /// it to `[0, 255]`, producing a new [`Raster`] of the same size.
    pub fn clip_and_round(&self) -> Raster {
        let data = self.data().iter().map(|&v| clip_sample(v)).collect();
        Raster::from_parts(self.width(), self.height(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_bounds() {
        assert_eq!(clip_sample(255.5), 255);
        assert_eq!(clip_sample(1e9), 255);
        assert_eq!(clip_sample(f64::INFINITY), 255);
        assert_eq!(clip_sample(-0.5), 0);
        assert_eq!(clip_sample(-0.4), 0);
        assert_eq!(clip_sample(-300.0), 0);
        assert_eq!(clip_sample(f64::NEG_INFINITY), 0);
        assert_eq!(clip_sample(f64::NAN), 0);
    }

    #[test]
    fn test_ties_to_even() {
        assert_eq!(clip_sample(0.5), 0);
        assert_eq!(clip_sample(1.5), 2);
        assert_eq!(clip_sample(2.5), 2);
        assert_eq!(clip_sample(3.5), 4);
        assert_eq!(clip_sample(254.5), 254);
        assert_eq!(clip_sample(127.49), 127);
        assert_eq!(clip_sample(127.51), 128);
    }

    #[test]
    fn test_integers_pass_through() {
        for v in 0..=255u8 {
            assert_eq!(clip_sample(f64::from(v)), v);
        }
    }

    #[test]
    fn test_clip_and_round_raster() {
        let fraster = FRaster::from_data(3, 2, vec![-12.0, 0.49, 19.999, 128.5, 255.49, 1000.0])
            .unwrap();
        let raster = fraster.clip_and_round();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.data(), &[0, 0, 20, 128, 255, 255]);
    }
}
