//! Kernel correlation
//!
//! Applies a square kernel at every position of an image without flipping
//! it (correlation, not convolution). Neighbours outside the image are
//! read through edge-clamp extension, so the kernel may be larger than
//! the image. Results are left unclipped and unrounded.
//!
//! Rows of the output are computed in parallel: each worker owns one
//! disjoint row of the preallocated buffer and reads only the source.

use crate::{FilterResult, Kernel};
use log::debug;
use rayon::prelude::*;
use steglens_core::{FRaster, Raster};

/// Correlate an 8-bit raster with a kernel.
///
/// # Examples
///
/// ```
/// use steglens_core::Raster;
/// use steglens_filter::{Kernel, correlate};
///
/// let raster = Raster::from_data(2, 1, vec![0, 90]).unwrap();
/// let out = correlate(&raster, &Kernel::box_blur(3).unwrap()).unwrap();
/// assert!((out.data()[0] - 30.0).abs() < 1e-9);
/// assert!((out.data()[1] - 60.0).abs() < 1e-9);
/// ```
pub fn correlate(raster: &Raster, kernel: &Kernel) -> FilterResult<FRaster> {
    let (w, h) = raster.dimensions();
    debug!("correlate: {}x{} raster, {}x{} kernel", w, h, kernel.side(), kernel.side());
    let data = correlate_rows(w, h, kernel, |x, y| f64::from(raster.sample_clamped(x, y)));
    Ok(FRaster::from_data(w, h, data)?)
}

/// Correlate a floating-point raster with a kernel.
pub fn correlate_fraster(fraster: &FRaster, kernel: &Kernel) -> FilterResult<FRaster> {
    let (w, h) = fraster.dimensions();
    debug!(
        "correlate_fraster: {}x{} raster, {}x{} kernel",
        w,
        h,
        kernel.side(),
        kernel.side()
    );
    let data = correlate_rows(w, h, kernel, |x, y| fraster.sample_clamped(x, y));
    Ok(FRaster::from_data(w, h, data)?)
}

fn correlate_rows<S>(width: u32, height: u32, kernel: &Kernel, sample: S) -> Vec<f64>
where
    S: Fn(i64, i64) -> f64 + Sync,
{
    let taps: Vec<(i64, i64, f64)> = kernel
        .weights()
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            let (dx, dy) = kernel.offset(i);
            (dx, dy, weight)
        })
        .collect();

    let w = width as usize;
    let mut out = vec![0.0f64; w * height as usize];
    out.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let y = y as i64;
        for (x, dst) in row.iter_mut().enumerate() {
            let x = x as i64;
            *dst = taps
                .iter()
                .map(|&(dx, dy, weight)| weight * sample(x + dx, y + dy))
                .sum();
        }
    });
    out
}
