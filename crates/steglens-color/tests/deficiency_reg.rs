//! Colour-deficiency and luma regression test
//!
//! Runs every deficiency over a loaded colour image and checks the
//! per-pixel transform, the identity case and alpha handling. Also
//! checks that grey content survives a trip through RGB and back.

use steglens_color::{Deficiency, convert_to_gray, image_to_gray, rgb_to_gray, simulate_deficiency};
use steglens_core::{Image, RgbChannel, RgbRaster, color};
use steglens_test::{RegParams, load_test_color_image, load_test_image};

#[test]
fn deficiency_reg() {
    let mut rp = RegParams::new("deficiency");

    let image = load_test_color_image("hidden4.ppm").expect("load hidden4.ppm");
    let Image::Rgb(rgb) = image.clone() else {
        panic!("hidden4.ppm should decode as colour");
    };
    let (w, h) = rgb.dimensions();
    eprintln!("Image size: {}x{}", w, h);

    // --- Test 1: each deficiency is a pure per-pixel map ---
    for deficiency in Deficiency::ALL {
        let out = simulate_deficiency(&rgb, deficiency);
        rp.compare_values(w as f64, out.width() as f64, 0.0);
        rp.compare_values(h as f64, out.height() as f64, 0.0);
        let mut mismatches = 0;
        for y in 0..h {
            for x in 0..w {
                let src = rgb.get_rgb(x, y).unwrap();
                if out.get_rgb(x, y) != Some(deficiency.apply(src)) {
                    mismatches += 1;
                }
            }
        }
        rp.compare_values(0.0, mismatches as f64, 0.0);
        eprintln!("  {}: {} mismatches", deficiency, mismatches);
    }

    // --- Test 2: none is the identity ---
    let same = simulate_deficiency(&rgb, Deficiency::None);
    rp.compare_values(1.0, if same == rgb { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: known triples ---
    let probes = RgbRaster::from_rgb(3, 1, &[(100, 0, 0), (0, 100, 0), (0, 0, 100)])
        .expect("probes");
    let red = simulate_deficiency(&probes, Deficiency::Red);
    rp.compare_values(56.0, red.channel(RgbChannel::Red).data()[0] as f64, 0.0);
    rp.compare_values(44.0, red.channel(RgbChannel::Green).data()[1] as f64, 0.0);
    rp.compare_values(75.0, red.channel(RgbChannel::Blue).data()[2] as f64, 0.0);

    // --- Test 4: alpha is carried through ---
    let translucent = RgbRaster::from_data(1, 1, vec![color::compose_rgba(10, 20, 30, 99)])
        .expect("translucent");
    for deficiency in Deficiency::ALL {
        let out = simulate_deficiency(&translucent, deficiency);
        rp.compare_values(99.0, color::alpha(out.data()[0]) as f64, 0.0);
    }

    // --- Test 5: luma of the colour image ---
    let gray = image_to_gray(&image).expect("image_to_gray");
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = rgb.get_rgb(x, y).unwrap();
            rp.compare_values(
                rgb_to_gray(r, g, b) as f64,
                gray.get_sample(x, y).unwrap() as f64,
                0.0,
            );
        }
    }

    // --- Test 6: grey -> RGB -> grey is lossless ---
    let ramp = load_test_image("gradient8.pgm").expect("load gradient8.pgm");
    let back = convert_to_gray(&RgbRaster::from_gray(&ramp)).expect("convert_to_gray");
    rp.compare_rasters(&ramp, &back);

    assert!(rp.cleanup(), "deficiency regression test failed");
}
