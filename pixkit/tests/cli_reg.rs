//! Command-line regression test
//!
//! Runs the `pixkit` binary on synthetic images written to a temporary
//! directory and checks outputs and exit codes.

use pixkit::{Channels, io};
use pixkit_test::{RegParams, gradient_image, uniform_image};
use std::path::Path;
use std::process::Command;

fn pixkit(args: &[&str]) -> bool {
    Command::new(env!("CARGO_BIN_EXE_pixkit"))
        .args(args)
        .env("RUST_LOG", "warn")
        .status()
        .expect("spawn pixkit")
        .success()
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

#[test]
fn cli_reg() {
    let mut rp = RegParams::new("cli");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.png");
    let src = gradient_image(24, 18, Channels::Rgb);
    io::write_image(&src, &input).expect("write input");
    let inp = path_str(&input);

    let cases: [(&str, &[&str], (u32, u32)); 8] = [
        ("median.png", &["-median", "3"], (24, 18)),
        ("gaus.png", &["-gaus", "5", "1.2"], (24, 18)),
        ("rotate.png", &["-rotate", "30"], (24, 18)),
        ("resize.png", &["-resize", "0.5", "2"], (12, 36)),
        ("edge.png", &["-edge"], (24, 18)),
        ("sharp.jpg", &["-sharp"], (24, 18)),
        ("gray.png", &["-gray"], (24, 18)),
        ("hist.jpeg", &["-hist"], (24, 18)),
    ];
    for (name, mode, (w, h)) in cases {
        let out = dir.path().join(name);
        let mut args = vec![inp];
        args.extend_from_slice(mode);
        args.push(path_str(&out));
        rp.compare_values(1.0, pixkit(&args) as u8 as f64, 0.0);
        let result = io::read_image(&out).expect("read output");
        rp.compare_values(w as f64, result.width() as f64, 0.0);
        rp.compare_values(h as f64, result.height() as f64, 0.0);
    }

    // Grayscale output through PNG is exact.
    let gray = io::read_image(dir.path().join("gray.png")).expect("read gray");
    rp.compare_buffers(&src.convert_to_gray(), &gray);

    assert!(rp.cleanup(), "cli regression test failed");
}

#[test]
fn cli_failure_reg() {
    let mut rp = RegParams::new("cli_failure");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.png");
    io::write_image(&uniform_image(8, 8, Channels::Gray, 50), &input).expect("write input");
    let inp = path_str(&input);

    let bmp = dir.path().join("out.bmp");
    let out = dir.path().join("out.png");
    let missing = dir.path().join("missing.png");
    let failures: [Vec<&str>; 6] = [
        vec![],
        vec![inp, "-median", "4", path_str(&out)],
        vec![inp, "-median", "9", path_str(&out)],
        vec![inp, "-resize", "0", "1", path_str(&out)],
        vec![inp, "-gray", path_str(&bmp)],
        vec![path_str(&missing), "-gray", path_str(&out)],
    ];
    for args in &failures {
        rp.compare_values(0.0, pixkit(args) as u8 as f64, 0.0);
    }
    rp.compare_values(0.0, out.exists() as u8 as f64, 0.0);
    rp.compare_values(0.0, bmp.exists() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "cli failure regression test failed");
}
