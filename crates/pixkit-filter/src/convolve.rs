//! Convolution operations
//!
//! Applies a square [`Kernel`] to every channel of every pixel. Neighbours
//! outside the image are substituted through a [`BorderMode`] (clamp to
//! edge unless the caller picks another policy). Sums are accumulated in
//! `f64`, clamped to `[0, 255]` and truncated toward zero.

use crate::{FilterError, FilterResult, Kernel};
use pixkit_core::{BorderMode, PixelBuffer};
use tracing::debug;

/// Convolve an image with a kernel using clamp-to-edge borders.
///
/// Returns a new buffer with the same dimensions and channel layout; the
/// input is not modified.
///
/// # Example
///
/// ```
/// use pixkit_core::{Channels, PixelBuffer};
/// use pixkit_filter::{Kernel, convolve};
///
/// let buf = PixelBuffer::filled(4, 4, Channels::Gray, 60).unwrap();
/// let out = convolve(&buf, &Kernel::gaussian(3, 1.0).unwrap()).unwrap();
/// assert!(out.data().iter().all(|&v| v == 59 || v == 60));
/// ```
pub fn convolve(buf: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    convolve_with_border(buf, kernel, BorderMode::Clamp)
}

/// Convolve an image with a kernel using the given border policy.
pub fn convolve_with_border(
    buf: &PixelBuffer,
    kernel: &Kernel,
    border: BorderMode,
) -> FilterResult<PixelBuffer> {
    let w = buf.width();
    let h = buf.height();
    let spp = buf.spp();
    let size = kernel.size();
    let ksize = size as usize;
    let r = kernel.radius() as i64;
    debug!(w, h, spp, size, ?border, "convolve");

    let mut out = buf.create_template()?;
    let weights = kernel.data();
    let src = buf.data();
    let dst = out.data_mut();

    // Resolved neighbour columns for each x are the same on every row.
    let ncols = (w as usize)
        .checked_mul(ksize)
        .ok_or_else(|| FilterError::InvalidKernel(format!("kernel size {size} overflows")))?;
    let mut cols: Vec<u32> = Vec::new();
    cols.try_reserve_exact(ncols)
        .map_err(|_| pixkit_core::Error::AllocationFailed(ncols))?;
    cols.extend(
        (0..w as i64)
            .flat_map(|x| (-r..=r).map(move |dx| (x, dx)))
            .map(|(x, dx)| border.resolve(x + dx, w)),
    );
    let mut rows = vec![0u32; ksize];
    let mut acc = vec![0.0f64; spp as usize];

    for y in 0..h {
        for (ky, row) in rows.iter_mut().enumerate() {
            *row = border.resolve(y as i64 + ky as i64 - r, h);
        }
        for x in 0..w {
            acc.fill(0.0);
            let xcols = &cols[x as usize * ksize..(x as usize + 1) * ksize];
            for (ky, &sy) in rows.iter().enumerate() {
                let krow = &weights[ky * ksize..(ky + 1) * ksize];
                for (&k, &sx) in krow.iter().zip(xcols) {
                    if k == 0.0 {
                        continue;
                    }
                    let base = buf.offset_unchecked(sx, sy, 0);
                    for (a, &s) in acc.iter_mut().zip(&src[base..base + spp as usize]) {
                        *a += s as f64 * k;
                    }
                }
            }
            let base = out_offset(w, spp, x, y);
            for (d, &a) in dst[base..base + spp as usize].iter_mut().zip(&acc) {
                *d = a.clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(out)
}

#[inline]
fn out_offset(w: u32, spp: u32, x: u32, y: u32) -> usize {
    (y as usize * w as usize + x as usize) * spp as usize
}

/// Apply Gaussian blur
///
/// Builds a normalized `size x size` Gaussian kernel and convolves with it.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `size` is zero, even, or
/// larger than either image dimension, or if `sigma` is not positive.
pub fn gaussian_blur(buf: &PixelBuffer, size: u32, sigma: f64) -> FilterResult<PixelBuffer> {
    if size > buf.width() || size > buf.height() {
        return Err(FilterError::InvalidParameters(format!(
            "kernel size {} exceeds image {}x{}",
            size,
            buf.width(),
            buf.height()
        )));
    }
    let kernel = Kernel::gaussian(size, sigma)?;
    debug!(size, sigma, "gaussian_blur");
    convolve(buf, &kernel)
}
