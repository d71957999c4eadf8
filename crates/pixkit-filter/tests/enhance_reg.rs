//! Histogram equalization regression test
//!
//! Equalizes synthetic images whose channel-0 histograms are known in
//! closed form, and checks the colour and alpha handling.

use pixkit_core::{Channels, Histogram, ImageFormat};
use pixkit_filter::{equalize_histogram, equalize_trc, trc_map};
use pixkit_test::{RegParams, checkerboard_image, gradient_image, uniform_image};

#[test]
fn enhance_reg_gray() {
    let mut rp = RegParams::new("enhance_gray");

    // Every value appears equally often: the curve is the identity.
    let ramp = gradient_image(256, 4, Channels::Gray);
    let mut out = ramp.clone();
    equalize_histogram(&mut out).expect("equalize ramp");
    rp.compare_buffers(&ramp, &out);

    // Two levels stretch to the full range.
    let mut board = checkerboard_image(8, 6, Channels::Gray, 2, 40, 210);
    equalize_histogram(&mut board).expect("equalize checkerboard");
    rp.compare_buffers(&checkerboard_image(8, 6, Channels::Gray, 2, 0, 255), &board);

    // A single level collapses to black.
    let mut flat = uniform_image(5, 5, Channels::Gray, 93);
    equalize_histogram(&mut flat).expect("equalize uniform");
    rp.compare_buffers(&uniform_image(5, 5, Channels::Gray, 0), &flat);

    assert!(rp.cleanup(), "enhance_gray regression test failed");
}

#[test]
fn enhance_reg_color() {
    let mut rp = RegParams::new("enhance_color");

    let src = gradient_image(40, 30, Channels::Rgba);
    let mut out = src.clone();
    equalize_histogram(&mut out).expect("equalize rgba");

    let gray_channels = out.pixels().all(|px| px[0] == px[1] && px[1] == px[2]);
    rp.compare_values(1.0, gray_channels as u8 as f64, 0.0);
    let alpha_kept = out
        .pixels()
        .zip(src.pixels())
        .all(|(o, s)| o[3] == s[3]);
    rp.compare_values(1.0, alpha_kept as u8 as f64, 0.0);

    // Same result as mapping channel 0 through the curve by hand.
    let lut = equalize_trc(&Histogram::from_channel0(&src));
    let mut manual = src.clone();
    trc_map(&mut manual, &lut);
    rp.compare_buffers(&manual, &out);

    let mut rgb = gradient_image(40, 30, Channels::Rgb);
    equalize_histogram(&mut rgb).expect("equalize rgb");
    rp.write_buffer_and_check(&rgb, ImageFormat::Png)
        .expect("write equalized");

    assert!(rp.cleanup(), "enhance_color regression test failed");
}
