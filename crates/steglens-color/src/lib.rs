//! steglens-color - Colour helpers around the grayscale engine
//!
//! - **Luma reduction** ([`luma`]): RGB -> 8-bit grey with BT.601 weights
//! - **Deficiency simulation** ([`deficiency`]): per-pixel 3x3 matrix
//!   transforms approximating red, green or blue colour blindness

pub mod deficiency;
pub mod error;
pub mod luma;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use deficiency::{Deficiency, simulate_deficiency};
pub use luma::{convert_to_gray, image_to_gray, rgb_to_gray};
