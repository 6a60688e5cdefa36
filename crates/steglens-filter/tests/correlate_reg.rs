//! Correlation regression test
//!
//! Box blur, identity and unsharp kernels applied to the spot and
//! gradient images. Interior pixels of a linear ramp are reproduced
//! exactly by any symmetric averaging kernel.

use steglens_core::{FRaster, Raster};
use steglens_filter::{Filter, Kernel, blurred, correlate, correlate_fraster, sharpened};
use steglens_io::ImageFormat;
use steglens_test::{RegParams, load_test_image};

#[test]
fn correlate_reg() {
    let mut rp = RegParams::new("correlate");

    let spot = load_test_image("spot3.pgm").expect("load spot3.pgm");
    let ramp = load_test_image("gradient8.pgm").expect("load gradient8.pgm");
    let (w, h) = ramp.dimensions();
    eprintln!("Image size: {}x{}", w, h);

    // --- Test 1: identity kernels of every odd side ---
    for side in [1, 3, 5, 7] {
        let kernel = Kernel::identity(side).expect("identity");
        let out = correlate(&ramp, &kernel).expect("correlate").clip_and_round();
        rp.compare_rasters(&ramp, &out);
    }
    rp.compare_rasters(&ramp, &blurred(&ramp, 1).expect("blurred(1)"));

    // --- Test 2: box sums over the spot ---
    // A 3x3 all-ones kernel sees eight 10s and the 100 everywhere
    let ones = Kernel::from_slice(3, &[1.0; 9]).expect("ones");
    let sums = correlate(&spot, &ones).expect("correlate");
    for &v in sums.data() {
        rp.compare_values(180.0, v, 0.0);
    }
    let blur = blurred(&spot, 3).expect("blurred");
    rp.compare_rasters(&Raster::new_with_value(3, 3, 20).expect("raster"), &blur);

    // --- Test 3: sharpening the spot ---
    let sharp = sharpened(&spot, 3).expect("sharpened");
    let expected = Raster::from_data(3, 3, vec![0, 0, 0, 0, 180, 0, 0, 0, 0]).expect("raster");
    rp.compare_rasters(&expected, &sharp);

    // --- Test 4: linear ramp interior is preserved ---
    for side in [3, 5] {
        let r = side / 2;
        let blur = blurred(&ramp, side).expect("blurred");
        let sharp = sharpened(&ramp, side).expect("sharpened");
        rp.compare_values(w as f64, blur.width() as f64, 0.0);
        rp.compare_values(h as f64, blur.height() as f64, 0.0);
        for y in r..h - r {
            for x in r..w - r {
                let v = ramp.get_sample(x, y).unwrap() as f64;
                rp.compare_values(v, blur.get_sample(x, y).unwrap() as f64, 0.0);
                rp.compare_values(v, sharp.get_sample(x, y).unwrap() as f64, 0.0);
            }
        }
        eprintln!("  side {}: interior {}x{} preserved", side, w - 2 * r, h - 2 * r);
    }

    // --- Test 5: even-sided box on a flat image stays flat ---
    let flat = Raster::new_with_value(5, 4, 123).expect("flat");
    let blur = blurred(&flat, 2).expect("blurred(2)");
    rp.compare_rasters(&flat, &blur);

    // --- Test 6: float input matches byte input ---
    let kernel = Kernel::box_blur(5).expect("box_blur");
    let a = correlate(&ramp, &kernel).expect("correlate");
    let b = correlate_fraster(&FRaster::from_raster(&ramp), &kernel).expect("correlate_fraster");
    for (&x, &y) in a.data().iter().zip(b.data()) {
        rp.compare_values(x, y, 1e-9);
    }

    // --- Test 7: kernel larger than the image ---
    let big = Kernel::box_blur(9).expect("box_blur");
    let out = correlate(&spot, &big).expect("correlate").clip_and_round();
    rp.compare_values(3.0, out.width() as f64, 0.0);
    rp.compare_values(3.0, out.height() as f64, 0.0);

    // --- Test 8: named filters write through the golden check ---
    for filter in [Filter::Invert, Filter::Blur(3), Filter::Sharpen(3)] {
        let out = filter.apply(&ramp).expect("apply");
        eprintln!("  {}: mean {:.2}", filter.name(), out.mean());
        rp.write_raster_and_check(&out, ImageFormat::Pnm)
            .expect("write_raster_and_check");
    }

    assert!(rp.cleanup(), "correlate regression test failed");
}
