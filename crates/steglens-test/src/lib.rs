//! steglens-test - Regression test framework for steglens
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use steglens_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("blur");
//! let raster = load_test_image("spot3.pgm").unwrap();
//! rp.compare_values(3.0, raster.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use steglens_core::{Image, Raster};

/// Load a test image from the test data directory as a grey raster
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "gradient.pgm")
pub fn load_test_image(name: &str) -> TestResult<Raster> {
    let path = test_data_path(name);
    steglens_io::read_gray(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Load a test image without reducing colour input to grey
pub fn load_test_color_image(name: &str) -> TestResult<Image> {
    let path = test_data_path(name);
    steglens_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // steglens-test is at crates/steglens-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
