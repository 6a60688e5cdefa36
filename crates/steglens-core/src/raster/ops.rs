//! Per-sample operations producing new rasters

use super::{Raster, RasterData};
use std::sync::Arc;

impl Raster {
    /// Apply `f` to every sample, returning a new raster of the same size.
    ///
    /// The source is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use steglens_core::Raster;
    ///
    /// let raster = Raster::from_data(2, 1, vec![10, 20]).unwrap();
    /// let doubled = raster.map(|v| v.saturating_mul(2));
    /// assert_eq!(doubled.data(), &[20, 40]);
    /// ```
    pub fn map<F>(&self, f: F) -> Raster
    where
        F: Fn(u8) -> u8,
    {
        Raster {
            inner: Arc::new(RasterData {
                width: self.width(),
                height: self.height(),
                data: self.data().iter().map(|&v| f(v)).collect(),
            }),
        }
    }

    /// Count samples that are not zero.
    pub fn count_nonzero(&self) -> usize {
        self.data().iter().filter(|&&v| v != 0).count()
    }

    /// Mean sample value.
    pub fn mean(&self) -> f64 {
        let sum: u64 = self.data().iter().map(|&v| u64::from(v)).sum();
        sum as f64 / self.data().len() as f64
    }
}
