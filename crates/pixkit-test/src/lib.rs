//! pixkit-test - Regression test framework for pixkit
//!
//! This crate provides a small regression harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! It also builds the deterministic synthetic images the regression tests
//! run on, so no image fixtures need to live in the repository.
//!
//! # Usage
//!
//! ```ignore
//! use pixkit_core::Channels;
//! use pixkit_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("rank");
//! let pix = gradient_image(32, 16, Channels::Rgb);
//! rp.compare_values(32.0, pix.width() as f64, 0.0);
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

use pixkit_core::{Channels, PixelBuffer};

/// Build an image with every sample set to `value`.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn uniform_image(width: u32, height: u32, channels: Channels, value: u8) -> PixelBuffer {
    PixelBuffer::filled(width, height, channels, value).expect("uniform test image")
}

/// Build a diagonal gradient image.
///
/// Channel 0 rises left to right, channel 1 top to bottom and channel 2
/// along the anti-diagonal. Alpha, when present, is a constant 255.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn gradient_image(width: u32, height: u32, channels: Channels) -> PixelBuffer {
    let mut pix = PixelBuffer::new(width, height, channels).expect("gradient test image");
    let wd = (width.max(2) - 1) as f64;
    let hd = (height.max(2) - 1) as f64;
    for (i, px) in pix.pixels_mut().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        let gx = (x as f64 * 255.0 / wd).round() as u8;
        let gy = (y as f64 * 255.0 / hd).round() as u8;
        px[0] = gx;
        if channels.has_color() {
            px[1] = gy;
            px[2] = 255 - ((gx as u16 + gy as u16) / 2) as u8;
        }
        if channels == Channels::Rgba {
            px[3] = 255;
        }
    }
    pix
}

/// Build a checkerboard of `cell`-sized squares alternating `dark` and
/// `light` in every channel.
///
/// # Panics
///
/// Panics if `width`, `height` or `cell` is zero.
pub fn checkerboard_image(
    width: u32,
    height: u32,
    channels: Channels,
    cell: u32,
    dark: u8,
    light: u8,
) -> PixelBuffer {
    assert!(cell > 0, "checkerboard cell must be nonzero");
    let mut pix = PixelBuffer::new(width, height, channels).expect("checkerboard test image");
    for (i, px) in pix.pixels_mut().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        let v = if (x / cell + y / cell) % 2 == 0 {
            dark
        } else {
            light
        };
        px.fill(v);
    }
    pix
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixkit-test is at crates/pixkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
