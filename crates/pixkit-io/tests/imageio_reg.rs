//! Image I/O regression test
//!
//! Writes synthetic images through the file system in every supported
//! format and reads them back.

use pixkit_core::{Channels, ImageFormat};
use pixkit_io::{IoError, WriteOptions, read_image, write_image, write_image_with_options};
use pixkit_test::{RegParams, checkerboard_image, gradient_image, uniform_image};

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");
    let dir = tempfile::tempdir().expect("tempdir");

    for channels in [Channels::Gray, Channels::Rgb, Channels::Rgba] {
        let pix = gradient_image(37, 23, channels);
        let path = dir.path().join(format!("grad{}.png", channels.count()));
        write_image(&pix, &path).expect("write png");
        let back = read_image(&path).expect("read png");
        rp.compare_buffers(&pix, &back);
    }

    let pix = checkerboard_image(16, 16, Channels::Rgb, 4, 0, 255);
    rp.write_buffer_and_check(&pix, ImageFormat::Png)
        .expect("write_buffer_and_check");

    assert!(rp.cleanup(), "pngio regression test failed");
}

#[test]
fn jpegio_reg() {
    let mut rp = RegParams::new("jpegio");
    let dir = tempfile::tempdir().expect("tempdir");

    // Uniform images survive lossy coding almost exactly.
    let pix = uniform_image(24, 16, Channels::Rgb, 90);
    for name in ["flat.jpg", "flat.JPEG"] {
        let path = dir.path().join(name);
        write_image(&pix, &path).expect("write jpeg");
        rp.compare_values(1.0, if read_header(&path) == [0xFF, 0xD8] { 1.0 } else { 0.0 }, 0.0);
        let back = read_image(&path).expect("read jpeg");
        rp.compare_values(24.0, back.width() as f64, 0.0);
        rp.compare_values(16.0, back.height() as f64, 0.0);
        let max_err = pix
            .data()
            .iter()
            .zip(back.data())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0);
        rp.compare_values(0.0, max_err as f64, 2.0);
    }

    // Lower quality gives a smaller file for a busy image.
    let busy = checkerboard_image(64, 64, Channels::Gray, 1, 0, 255);
    let hi = dir.path().join("hi.jpg");
    let lo = dir.path().join("lo.jpg");
    write_image(&busy, &hi).expect("write q100");
    write_image_with_options(&busy, &lo, &WriteOptions::default().with_jpeg_quality(20))
        .expect("write q20");
    let hi_len = std::fs::metadata(&hi).expect("meta").len();
    let lo_len = std::fs::metadata(&lo).expect("meta").len();
    rp.compare_values(1.0, if lo_len < hi_len { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "jpegio regression test failed");
}

#[test]
fn ioerrors_reg() {
    let mut rp = RegParams::new("ioerrors");
    let dir = tempfile::tempdir().expect("tempdir");
    let pix = uniform_image(4, 4, Channels::Gray, 10);

    // Unsupported extension: error and no file.
    let bmp = dir.path().join("out.bmp");
    let err = write_image(&pix, &bmp);
    rp.compare_values(1.0, matches!(err, Err(IoError::UnsupportedFormat(_))) as u8 as f64, 0.0);
    rp.compare_values(0.0, bmp.exists() as u8 as f64, 0.0);

    let noext = dir.path().join("out");
    rp.compare_values(1.0, write_image(&pix, &noext).is_err() as u8 as f64, 0.0);
    rp.compare_values(0.0, noext.exists() as u8 as f64, 0.0);

    // Missing input file.
    let missing = read_image(dir.path().join("missing.png"));
    rp.compare_values(1.0, matches!(missing, Err(IoError::Io(_))) as u8 as f64, 0.0);

    // Content that is neither PNG nor JPEG, whatever the extension says.
    let fake = dir.path().join("fake.png");
    std::fs::write(&fake, b"not an image at all").expect("write fake");
    rp.compare_values(1.0, read_image(&fake).is_err() as u8 as f64, 0.0);

    // Format is taken from content, not extension.
    let disguised = dir.path().join("really_png.jpg.png");
    write_image(&pix, &disguised).expect("write");
    let renamed = dir.path().join("really_png.jpg");
    std::fs::rename(&disguised, &renamed).expect("rename");
    let back = read_image(&renamed).expect("read renamed");
    rp.compare_buffers(&pix, &back);

    assert!(rp.cleanup(), "ioerrors regression test failed");
}

fn read_header(path: &std::path::Path) -> [u8; 2] {
    let data = std::fs::read(path).expect("read back");
    [data[0], data[1]]
}
