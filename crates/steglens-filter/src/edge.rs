//! Sobel edge magnitude

use crate::{FilterResult, Kernel, correlate};
use log::debug;
use steglens_core::Raster;

/// Gradient magnitude `sqrt(gx^2 + gy^2)` from the two 3x3 Sobel kernels.
///
/// Both gradients are kept unclipped until the magnitude is formed, then
/// rounded and clamped once.
pub fn edges(raster: &Raster) -> FilterResult<Raster> {
    debug!("edges: {}x{}", raster.width(), raster.height());
    let gx = correlate(raster, &Kernel::sobel_x())?;
    let gy = correlate(raster, &Kernel::sobel_y())?;
    Ok(gx.zip_with(&gy, f64::hypot)?.clip_and_round())
}
