//! FRaster - floating-point image
//!
//! `FRaster` is a 2D array of `f64` values used for correlation
//! intermediates, where samples may be negative, exceed 255, or be
//! fractional. [`FRaster::clip_and_round`] (see [`normalize`]) turns one
//! back into a valid [`Raster`].
//!
//! # Examples
//!
//! ```
//! use steglens_core::FRaster;
//!
//! let fraster = FRaster::from_data(2, 1, vec![-3.5, 300.25]).unwrap();
//! assert_eq!(fraster.sample_clamped(-1, 0), -3.5);
//! assert_eq!(fraster.clip_and_round().data(), &[0, 255]);
//! ```

pub mod normalize;

use crate::error::{Error, Result, check_shape};
use crate::raster::Raster;
use crate::raster::border::clamped_index;

/// Floating-point image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at
/// (x, y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FRaster {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f64>,
}

impl FRaster {
    /// Create a new FRaster with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new FRaster with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(FRaster {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an FRaster from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        check_shape(width, height, data.len())?;
        Ok(FRaster {
            width,
            height,
            data,
        })
    }

    /// Convert an 8-bit raster sample-for-sample.
    pub fn from_raster(raster: &Raster) -> Self {
        FRaster {
            width: raster.width(),
            height: raster.height(),
            data: raster.data().iter().map(|&v| f64::from(v)).collect(),
        }
    }

    /// Get the image width in samples
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in samples
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a sample value
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of bounds.
    pub fn get_sample(&self, x: u32, y: u32) -> Result<f64> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set a sample value
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, value: f64) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Get the sample at `(x, y)` with edge-clamp extension.
    ///
    /// Same policy as [`Raster::sample_clamped`].
    #[inline]
    pub fn sample_clamped(&self, x: i64, y: i64) -> f64 {
        self.data[clamped_index(x, y, self.width, self.height)]
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get a row of samples
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f64] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Apply `f` to every sample, returning a new FRaster
    pub fn map<F>(&self, f: F) -> FRaster
    where
        F: Fn(f64) -> f64,
    {
        FRaster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two same-sized FRasters sample by sample
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if the dimensions differ.
    pub fn zip_with<F>(&self, other: &FRaster, f: F) -> Result<FRaster>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dimensions() != other.dimensions() {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        Ok(FRaster {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Minimum sample value (NaN samples are skipped)
    pub fn min_value(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::min)
    }

    /// Maximum sample value (NaN samples are skipped)
    pub fn max_value(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }

    /// Sum of all samples
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
