//! Low bit-plane extraction
//!
//! Keeps the `k` least-significant bits of every sample (grey) or of every
//! colour channel (RGB), discarding the rest. Results are small integers
//! in `[0, 2^k - 1]` stored in ordinary rasters.

use crate::{StegoError, StegoResult};
use steglens_core::{Raster, RgbRaster};

/// Bit mask `2^k - 1` for `k` in `1..=8`.
///
/// # Errors
///
/// Returns [`StegoError::InvalidBitCount`] for any other `k`.
pub fn low_bits_mask(k: u32) -> StegoResult<u8> {
    if !(1..=8).contains(&k) {
        return Err(StegoError::InvalidBitCount(k));
    }
    Ok(((1u16 << k) - 1) as u8)
}

/// Keep the `k` lowest bits of every sample.
///
/// # Examples
///
/// ```
/// use steglens_core::Raster;
/// use steglens_stego::extract_gray_bits;
///
/// let raster = Raster::from_data(3, 1, vec![5, 4, 255]).unwrap();
/// assert_eq!(extract_gray_bits(&raster, 1).unwrap().data(), &[1, 0, 1]);
/// assert_eq!(extract_gray_bits(&raster, 2).unwrap().data(), &[1, 0, 3]);
/// ```
pub fn extract_gray_bits(raster: &Raster, k: u32) -> StegoResult<Raster> {
    let mask = low_bits_mask(k)?;
    Ok(raster.map(|v| v & mask))
}

/// Least-significant bit plane (values 0 or 1).
pub fn lsb_plane(raster: &Raster) -> Raster {
    raster.map(|v| v & 1)
}

/// Keep the `k` lowest bits of each colour channel independently.
///
/// Alpha is preserved.
pub fn extract_rgb_bits(rgb: &RgbRaster, k: u32) -> StegoResult<RgbRaster> {
    let mask = low_bits_mask(k)?;
    Ok(rgb.map_channels(|v| v & mask))
}

/// Two least-significant bits of each channel, `bit0 + 2 * bit1` (0..=3).
pub fn low_two_bits(rgb: &RgbRaster) -> RgbRaster {
    rgb.map_channels(|v| v & 0b11)
}
