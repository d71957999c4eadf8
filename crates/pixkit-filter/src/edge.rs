//! Sharpening and edge detection
//!
//! Both use the fixed 3x3 cross pattern from [`Kernel::fixed_pattern`].
//! Edge detection runs on a grayscale working copy so every channel of the
//! result carries the same response.

use crate::{FilterResult, Kernel, convolve};
use pixkit_core::PixelBuffer;
use tracing::debug;

/// Sharpen an image with the centre-5 cross kernel.
///
/// On a uniform region the response is `5v - 4v = v`, so flat areas are
/// unchanged.
pub fn sharpen(buf: &PixelBuffer) -> FilterResult<PixelBuffer> {
    debug!(w = buf.width(), h = buf.height(), "sharpen");
    convolve(buf, &Kernel::sharpen())
}

/// Detect edges with the centre-4 cross kernel (a Laplacian).
///
/// The input is reduced to gray first; the source buffer itself is left
/// untouched. Uniform regions produce 0.
pub fn edge_detect(buf: &PixelBuffer) -> FilterResult<PixelBuffer> {
    debug!(w = buf.width(), h = buf.height(), "edge_detect");
    let gray = buf.convert_to_gray();
    convolve(&gray, &Kernel::edge_detect())
}
