//! Edge-clamp extension
//!
//! Lookups outside the image reuse the nearest border sample. Each axis
//! is clamped independently, so a coordinate that overflows both axes
//! lands on the matching corner. The lookup is total: there is no error
//! path for any `i64` coordinate pair.

use super::Raster;

/// Clamp a signed coordinate into `[0, len - 1]`.
///
/// `len` is always non-zero for a constructed image.
#[inline]
pub(crate) fn clamp_coord(v: i64, len: u32) -> usize {
    v.clamp(0, i64::from(len) - 1) as usize
}

/// Flat index of the edge-clamped sample at `(x, y)`.
#[inline]
pub(crate) fn clamped_index(x: i64, y: i64, width: u32, height: u32) -> usize {
    clamp_coord(y, height) * width as usize + clamp_coord(x, width)
}

impl Raster {
    /// Get the sample at `(x, y)` with edge-clamp extension.
    ///
    /// In-range coordinates return the stored sample exactly; anything
    /// else returns the sample at `(clamp(x, 0, w-1), clamp(y, 0, h-1))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use steglens_core::Raster;
    ///
    /// let raster = Raster::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(raster.sample_clamped(-5, -5), 1);
    /// assert_eq!(raster.sample_clamped(9, 0), 2);
    /// assert_eq!(raster.sample_clamped(9, 9), 4);
    /// ```
    #[inline]
    pub fn sample_clamped(&self, x: i64, y: i64) -> u8 {
        self.data()[clamped_index(x, y, self.width(), self.height())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(w: u32, h: u32) -> Raster {
        let data = (0..w * h).map(|i| (i * 7 % 251) as u8).collect();
        Raster::from_data(w, h, data).unwrap()
    }

    #[test]
    fn test_in_bounds_is_exact() {
        let raster = pattern(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(
                    raster.sample_clamped(x as i64, y as i64),
                    raster.data()[(y * 5 + x) as usize]
                );
            }
        }
    }

    #[test]
    fn test_single_axis_overflow() {
        let raster = pattern(6, 7);
        let (w, h) = (6i64, 7i64);
        for y in 0..h {
            assert_eq!(raster.sample_clamped(-1, y), raster.sample_clamped(0, y));
            assert_eq!(raster.sample_clamped(-100, y), raster.sample_clamped(0, y));
            assert_eq!(raster.sample_clamped(w, y), raster.sample_clamped(w - 1, y));
        }
        for x in 0..w {
            assert_eq!(raster.sample_clamped(x, -1), raster.sample_clamped(x, 0));
            assert_eq!(raster.sample_clamped(x, h + 3), raster.sample_clamped(x, h - 1));
        }
    }

    #[test]
    fn test_double_overflow_hits_corners() {
        let raster = pattern(6, 7);
        let last = raster.data().len() - 1;
        assert_eq!(raster.sample_clamped(-1, -1), raster.data()[0]);
        assert_eq!(raster.sample_clamped(6, -2), raster.data()[5]);
        assert_eq!(raster.sample_clamped(-3, 7), raster.data()[36]);
        assert_eq!(raster.sample_clamped(100, 100), raster.data()[last]);
        assert_eq!(raster.sample_clamped(i64::MIN, i64::MAX), raster.data()[36]);
    }

    #[test]
    fn test_single_sample_raster() {
        let raster = Raster::new_with_value(1, 1, 42).unwrap();
        assert_eq!(raster.sample_clamped(-1, 1), 42);
        assert_eq!(raster.sample_clamped(3, -3), 42);
    }
}
