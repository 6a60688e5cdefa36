//! Point and smoothing filters
//!
//! - `inverted` -> per-sample negative
//! - `blurred` -> box-blur correlation
//! - `sharpened` -> unsharp correlation

use crate::{FilterResult, Kernel, correlate};
use log::debug;
use steglens_core::{MAX_SAMPLE, Raster};

/// Photographic negative: every sample `v` becomes `255 - v`.
///
/// Applying it twice gives back the input.
pub fn inverted(raster: &Raster) -> Raster {
    debug!("inverted: {}x{}", raster.width(), raster.height());
    raster.map(|v| MAX_SAMPLE - v)
}

/// Box blur with an `side x side` averaging kernel.
///
/// `blurred(raster, 1)` returns an identical copy.
///
/// # Arguments
/// * `raster` - Input image
/// * `side` - Kernel side, at least 1 (even sides are accepted)
pub fn blurred(raster: &Raster, side: u32) -> FilterResult<Raster> {
    debug!("blurred: {}x{} side={}", raster.width(), raster.height(), side);
    let kernel = Kernel::box_blur(side)?;
    Ok(correlate(raster, &kernel)?.clip_and_round())
}

/// Sharpen by correlating with the unsharp kernel
/// (`2 * identity - box_blur`).
///
/// # Arguments
/// * `raster` - Input image
/// * `side` - Odd kernel side
pub fn sharpened(raster: &Raster, side: u32) -> FilterResult<Raster> {
    debug!("sharpened: {}x{} side={}", raster.width(), raster.height(), side);
    let kernel = Kernel::unsharp(side)?;
    Ok(correlate(raster, &kernel)?.clip_and_round())
}
