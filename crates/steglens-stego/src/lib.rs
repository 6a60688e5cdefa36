//! steglens-stego - Bit-plane extraction and hidden-image reveal
//!
//! Reads raw samples only; no correlation or normalisation is involved.
//!
//! - [`bitplane`]: keep the `k` lowest bits of samples or colour channels
//! - [`reveal`]: stretch those bits back into a visible image

pub mod bitplane;
mod error;
pub mod reveal;

pub use error::{StegoError, StegoResult};

pub use bitplane::{extract_gray_bits, extract_rgb_bits, low_bits_mask, low_two_bits, lsb_plane};
pub use reveal::{GRAY_REVEAL_SCALE, reveal, reveal_gray, reveal_rgb};
