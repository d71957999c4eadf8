//! Image scaling operations
//!
//! Bicubic resampling with the Catmull-Rom cubic (`a = -0.5`). Each
//! destination pixel `(x, y)` maps back to the source point
//! `(x / scale_x, y / scale_y)` and is computed from the 4x4 source
//! neighbourhood `floor - 1 ..= floor + 2` on each axis. Neighbours beyond
//! the image are clamped to the nearest edge sample.
//!
//! | Function        | Output size                                   |
//! |-----------------|-----------------------------------------------|
//! | `scale`         | `floor(w * scale_x)` x `floor(h * scale_y)`   |
//! | `scale_to_size` | exactly the requested width and height        |

use crate::{TransformError, TransformResult};
use pixkit_core::{PixelBuffer, clamp_coord};
use tracing::debug;

/// Catmull-Rom shape parameter
const CUBIC_A: f64 = -0.5;

/// Bicubic convolution weight for a sample at distance `t`.
///
/// `w(0) = 1`, `w(±1) = w(±2) = 0`, and the weights of the four taps
/// around any point sum to 1.
pub fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        (CUBIC_A + 2.0) * t * t * t - (CUBIC_A + 3.0) * t * t + 1.0
    } else if t < 2.0 {
        CUBIC_A * t * t * t - 5.0 * CUBIC_A * t * t + 8.0 * CUBIC_A * t - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

/// Scale an image by the given factors using bicubic interpolation.
///
/// # Arguments
/// * `buf` - Input image
/// * `scale_x` - Horizontal scale factor (e.g., 2.0 = double width)
/// * `scale_y` - Vertical scale factor
///
/// # Errors
///
/// [`TransformError::InvalidScaleFactor`] if a factor is not a positive
/// finite number; [`TransformError::InvalidParameters`] if the output would
/// have zero width or height or would not fit in `u32`.
///
/// # Example
///
/// ```
/// use pixkit_core::{Channels, PixelBuffer};
/// use pixkit_transform::scale;
///
/// let buf = PixelBuffer::filled(10, 6, Channels::Gray, 77).unwrap();
/// let out = scale(&buf, 1.5, 0.5).unwrap();
/// assert_eq!((out.width(), out.height()), (15, 3));
/// assert!(out.data().iter().all(|&v| v == 77));
/// ```
pub fn scale(buf: &PixelBuffer, scale_x: f64, scale_y: f64) -> TransformResult<PixelBuffer> {
    check_factor("scale_x", scale_x)?;
    check_factor("scale_y", scale_y)?;

    let new_w = scaled_dim(buf.width(), scale_x)?;
    let new_h = scaled_dim(buf.height(), scale_y)?;
    debug!(
        w = buf.width(),
        h = buf.height(),
        scale_x,
        scale_y,
        new_w,
        new_h,
        "scale"
    );
    resample(buf, new_w, new_h, scale_x, scale_y)
}

/// Scale an image to an exact size using bicubic interpolation.
///
/// The scale factors are `width / w` and `height / h`.
pub fn scale_to_size(buf: &PixelBuffer, width: u32, height: u32) -> TransformResult<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be nonzero, got {}x{}",
            width, height
        )));
    }
    let scale_x = width as f64 / buf.width() as f64;
    let scale_y = height as f64 / buf.height() as f64;
    debug!(w = buf.width(), h = buf.height(), width, height, "scale_to_size");
    resample(buf, width, height, scale_x, scale_y)
}

fn check_factor(name: &str, factor: f64) -> TransformResult<()> {
    if factor > 0.0 && factor.is_finite() {
        Ok(())
    } else {
        Err(TransformError::InvalidScaleFactor(format!(
            "{name} must be positive and finite, got {factor}"
        )))
    }
}

fn scaled_dim(len: u32, factor: f64) -> TransformResult<u32> {
    let scaled = (len as f64 * factor).floor();
    if scaled < 1.0 || scaled > u32::MAX as f64 {
        return Err(TransformError::InvalidParameters(format!(
            "scaling {} by {} gives an empty or oversized dimension",
            len, factor
        )));
    }
    Ok(scaled as u32)
}

/// Source taps and weights for one destination coordinate.
struct Taps {
    index: [u32; 4],
    weight: [f64; 4],
}

fn taps_for_axis(dst_len: u32, src_len: u32, factor: f64) -> TransformResult<Vec<Taps>> {
    let mut table: Vec<Taps> = Vec::new();
    table
        .try_reserve_exact(dst_len as usize)
        .map_err(|_| pixkit_core::Error::AllocationFailed(dst_len as usize))?;
    table.extend((0..dst_len).map(|d| {
        let s = d as f64 / factor;
        let base = s.floor();
        let frac = s - base;
        let base = base as i64;
        let mut taps = Taps {
            index: [0; 4],
            weight: [0.0; 4],
        };
        for (k, m) in (-1i64..=2).enumerate() {
            taps.index[k] = clamp_coord(base + m, src_len);
            taps.weight[k] = cubic_weight(m as f64 - frac);
        }
        taps
    }));
    Ok(table)
}

fn resample(
    buf: &PixelBuffer,
    new_w: u32,
    new_h: u32,
    scale_x: f64,
    scale_y: f64,
) -> TransformResult<PixelBuffer> {
    let spp = buf.spp() as usize;
    let mut out = PixelBuffer::new(new_w, new_h, buf.channels())?;
    let xtaps = taps_for_axis(new_w, buf.width(), scale_x)?;
    let ytaps = taps_for_axis(new_h, buf.height(), scale_y)?;
    let src = buf.data();
    let mut acc = vec![0.0f64; spp];

    for (px, (x, y)) in out
        .pixels_mut()
        .zip((0..new_h).flat_map(|y| (0..new_w).map(move |x| (x, y))))
    {
        let xt = &xtaps[x as usize];
        let yt = &ytaps[y as usize];
        acc.fill(0.0);
        let mut wsum = 0.0;
        for (&sy, &wy) in yt.index.iter().zip(&yt.weight) {
            for (&sx, &wx) in xt.index.iter().zip(&xt.weight) {
                let w = wx * wy;
                if w == 0.0 {
                    continue;
                }
                wsum += w;
                let base = buf.offset_unchecked(sx, sy, 0);
                for (a, &s) in acc.iter_mut().zip(&src[base..base + spp]) {
                    *a += w * s as f64;
                }
            }
        }
        for (d, &a) in px.iter_mut().zip(&acc) {
            let v = if wsum == 0.0 { 0.0 } else { a / wsum };
            *d = (v.clamp(0.0, 255.0) + 0.5) as u8;
        }
    }

    Ok(out)
}
