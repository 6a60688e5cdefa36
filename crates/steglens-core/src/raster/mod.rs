//! Raster - the 8-bit single-channel image container
//!
//! # Sample layout
//!
//! - One `u8` per sample, row-major, no padding
//! - The sample at column `x`, row `y` lives at index `y * width + x`
//! - Origin is the top-left corner
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared, read-only ownership).
//! Every transformation reads a `&Raster` and produces a new one. To build
//! or edit sample data, convert to a [`RasterMut`] via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then convert back with
//! `Into<Raster>`.

mod access;
pub(crate) mod border;
mod ops;

use crate::error::{Error, Result, check_shape};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, Clone, PartialEq, Eq)]
struct RasterData {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<u8>,
}

/// Raster - immutable 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use steglens_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert!(raster.data().iter().all(|&v| v == 0));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new raster with every sample set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self::from_parts(width, height, vec![value; size]))
    }

    /// Create a raster from row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use steglens_core::Raster;
    ///
    /// let raster = Raster::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(raster.get_sample(2, 1), Some(6));
    /// assert!(Raster::from_data(3, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_shape(width, height, data.len())?;
        Ok(Self::from_parts(width, height, data))
    }

    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the image width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the row-major sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get a single row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Try to take exclusive ownership for mutation.
    ///
    /// Succeeds only when this is the last reference; otherwise the
    /// raster is handed back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies, so the source stays untouched.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for Raster {}

/// Mutable raster used while building sample data.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a zero-filled mutable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(RasterMut {
            inner: RasterData {
                width,
                height,
                data: vec![0; size],
            },
        })
    }

    /// Get the image width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row-major sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the row-major sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get a mutable row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
