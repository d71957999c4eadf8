//! Rotation by an arbitrary angle
//!
//! The output always has the input's dimensions; content rotated past the
//! edges is cut off and uncovered areas take the fill value.
//!
//! # Rotation Methods
//!
//! - **Forward**: every source pixel is pushed to
//!   `trunc(R · (p - c) + c)` with `c = (w/2, h/2)`. Several sources may
//!   land on one destination (last write wins) and some destinations get no
//!   source at all, leaving fill-coloured holes for angles off the axes.
//! - **Inverse**: every destination pixel pulls the nearest source pixel
//!   through the inverse rotation, sampling at pixel centres. No holes.

use crate::{TransformError, TransformResult};
use pixkit_core::PixelBuffer;
use tracing::debug;

/// Rotation algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateMethod {
    /// Forward mapping with truncation
    #[default]
    Forward,
    /// Inverse mapping with nearest-neighbor sampling
    Inverse,
}

/// Background fill for pixels not covered by the rotated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateFill {
    /// Fill every sample with 0
    #[default]
    Black,
    /// Fill every sample with 255
    White,
    /// Fill every sample with a specific value
    Value(u8),
}

impl RotateFill {
    /// Get the sample value written for this fill.
    pub fn to_value(self) -> u8 {
        match self {
            RotateFill::Black => 0,
            RotateFill::White => 255,
            RotateFill::Value(v) => v,
        }
    }
}

/// Options for rotation operations
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateOptions {
    /// Rotation algorithm to use
    pub method: RotateMethod,
    /// Background fill
    pub fill: RotateFill,
}

impl RotateOptions {
    /// Create options with a specific method
    pub fn with_method(method: RotateMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Create options with a specific fill
    pub fn with_fill(fill: RotateFill) -> Self {
        Self {
            fill,
            ..Default::default()
        }
    }

    /// Set the rotation method
    pub fn method(mut self, method: RotateMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the background fill
    pub fn fill(mut self, fill: RotateFill) -> Self {
        self.fill = fill;
        self
    }
}

/// Rotate an image by `angle` degrees about its centre.
///
/// Uses forward mapping onto a black background. Positive angles turn the
/// image clockwise as displayed (y grows downward).
///
/// # Example
///
/// ```
/// use pixkit_core::{Channels, PixelBuffer};
/// use pixkit_transform::rotate;
///
/// let buf = PixelBuffer::filled(8, 6, Channels::Rgb, 50).unwrap();
/// let out = rotate(&buf, 0.0).unwrap();
/// assert_eq!(out, buf);
/// ```
pub fn rotate(buf: &PixelBuffer, angle: f64) -> TransformResult<PixelBuffer> {
    rotate_with_options(buf, angle, &RotateOptions::default())
}

/// Rotate an image by `angle` degrees with explicit options.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `angle` is not finite.
pub fn rotate_with_options(
    buf: &PixelBuffer,
    angle: f64,
    options: &RotateOptions,
) -> TransformResult<PixelBuffer> {
    if !angle.is_finite() {
        return Err(TransformError::InvalidParameters(format!(
            "rotation angle must be finite, got {angle}"
        )));
    }
    debug!(
        w = buf.width(),
        h = buf.height(),
        angle,
        method = ?options.method,
        "rotate"
    );

    let radians = angle.to_radians();
    let (sin, cos) = radians.sin_cos();
    let mut out = PixelBuffer::filled(
        buf.width(),
        buf.height(),
        buf.channels(),
        options.fill.to_value(),
    )?;

    match options.method {
        RotateMethod::Forward => rotate_forward(buf, &mut out, cos, sin),
        RotateMethod::Inverse => rotate_inverse(buf, &mut out, cos, sin),
    }
    Ok(out)
}

fn rotate_forward(src: &PixelBuffer, dst: &mut PixelBuffer, cos: f64, sin: f64) {
    let w = src.width();
    let h = src.height();
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;

    for y in 0..h {
        let dy = y as f64 - cy;
        for x in 0..w {
            let dx = x as f64 - cx;
            let nx = (dx * cos - dy * sin + cx) as i64;
            let ny = (dx * sin + dy * cos + cy) as i64;
            if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                continue;
            }
            copy_pixel(src, x, y, dst, nx as u32, ny as u32);
        }
    }
}

fn rotate_inverse(src: &PixelBuffer, dst: &mut PixelBuffer, cos: f64, sin: f64) {
    let w = src.width();
    let h = src.height();
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;

    for y in 0..h {
        let dy = y as f64 + 0.5 - cy;
        for x in 0..w {
            let dx = x as f64 + 0.5 - cx;
            let sx = (dx * cos + dy * sin + cx).floor() as i64;
            let sy = (-dx * sin + dy * cos + cy).floor() as i64;
            if sx < 0 || sy < 0 || sx >= w as i64 || sy >= h as i64 {
                continue;
            }
            copy_pixel(src, sx as u32, sy as u32, dst, x, y);
        }
    }
}

#[inline]
fn copy_pixel(src: &PixelBuffer, sx: u32, sy: u32, dst: &mut PixelBuffer, dx: u32, dy: u32) {
    let spp = src.spp() as usize;
    let s = src.offset_unchecked(sx, sy, 0);
    let d = dst.offset_unchecked(dx, dy, 0);
    dst.data_mut()[d..d + spp].copy_from_slice(&src.data()[s..s + spp]);
}
