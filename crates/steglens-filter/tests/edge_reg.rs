//! Edge magnitude regression test
//!
//! Sobel magnitude of the spot image, a constant image and the
//! gradient ramp (whose interior has a constant gradient).

use steglens_core::Raster;
use steglens_filter::{Kernel, correlate, edges};
use steglens_io::ImageFormat;
use steglens_test::{RegParams, load_test_image};

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");

    // --- Test 1: spot image ---
    let spot = load_test_image("spot3.pgm").expect("load spot3.pgm");
    let out = edges(&spot).expect("edges");
    let expected =
        Raster::from_data(3, 3, vec![127, 180, 127, 180, 0, 180, 127, 180, 127]).expect("raster");
    rp.compare_rasters(&expected, &out);

    // --- Test 2: constant image has no edges ---
    let flat = Raster::new_with_value(9, 7, 64).expect("flat");
    let out = edges(&flat).expect("edges");
    rp.compare_values(0.0, out.count_nonzero() as f64, 0.0);

    // --- Test 3: ramp v = 30x + 5y ---
    let ramp = load_test_image("gradient8.pgm").expect("load gradient8.pgm");
    let (w, h) = ramp.dimensions();
    let gx = correlate(&ramp, &Kernel::sobel_x()).expect("sobel_x");
    let gy = correlate(&ramp, &Kernel::sobel_y()).expect("sobel_y");
    let out = edges(&ramp).expect("edges");
    rp.compare_values(w as f64, out.width() as f64, 0.0);
    rp.compare_values(h as f64, out.height() as f64, 0.0);
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let i = (y * w + x) as usize;
            rp.compare_values(240.0, gx.data()[i], 0.0);
            rp.compare_values(40.0, gy.data()[i], 0.0);
            // hypot(240, 40) = 243.31
            rp.compare_values(243.0, out.get_sample(x, y).unwrap() as f64, 0.0);
        }
    }
    // On the clamped border one side of the difference collapses
    rp.compare_values(120.0, gx.data()[w as usize], 0.0);
    eprintln!("  ramp edges: mean {:.2}", out.mean());

    rp.write_raster_and_check(&out, ImageFormat::Pnm)
        .expect("write_raster_and_check");

    assert!(rp.cleanup(), "edge regression test failed");
}
