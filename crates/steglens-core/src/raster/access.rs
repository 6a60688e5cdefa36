//! Sample access functions
//!
//! Checked and unchecked getters/setters for individual samples. For
//! lookups that may fall outside the image, use the edge-clamping
//! sampler in the `border` module instead.

use super::{Raster, RasterMut};
use crate::error::{Error, Result};

impl Raster {
    /// Get a sample value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width() && y < self.height() {
            Some(self.get_sample_unchecked(x, y))
        } else {
            None
        }
    }

    /// Get a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the data buffer.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }
}

impl RasterMut {
    /// Get a sample value at (x, y).
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width() && y < self.height() {
            Some(self.data()[y as usize * self.width() as usize + x as usize])
        } else {
            None
        }
    }

    /// Set a sample value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_sample_unchecked(x, y, val);
        Ok(())
    }

    /// Set a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the data buffer.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_sample() {
        let mut raster = RasterMut::new(4, 3).unwrap();
        raster.set_sample(3, 2, 200).unwrap();
        raster.set_sample(0, 1, 17).unwrap();
        assert_eq!(raster.get_sample(3, 2), Some(200));

        let raster: Raster = raster.into();
        assert_eq!(raster.get_sample(3, 2), Some(200));
        assert_eq!(raster.get_sample(0, 1), Some(17));
        assert_eq!(raster.data()[4], 17);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut raster = RasterMut::new(4, 3).unwrap();
        assert!(raster.set_sample(4, 0, 1).is_err());
        assert!(raster.set_sample(0, 3, 1).is_err());

        let raster: Raster = raster.into();
        assert_eq!(raster.get_sample(4, 0), None);
        assert_eq!(raster.get_sample(0, 3), None);
    }
}
