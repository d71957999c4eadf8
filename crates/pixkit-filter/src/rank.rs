//! Rank filtering operations
//!
//! Provides rank (order-statistic) filters over a square window: median,
//! min, max and any rank in between. Each channel is filtered on its own.
//! Window neighbours outside the image are resolved through a
//! [`BorderMode`], clamp-to-edge by default.

use crate::{FilterError, FilterResult};
use pixkit_core::{BorderMode, PixelBuffer};
use tracing::debug;

/// Apply median filter.
///
/// Outputs the element at index `size² / 2` of the sorted window.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] unless `size` is odd,
/// positive and no larger than either image dimension.
///
/// # Example
///
/// ```
/// use pixkit_core::{Channels, PixelBuffer};
/// use pixkit_filter::median_filter;
///
/// let buf = PixelBuffer::filled(3, 3, Channels::Gray, 100).unwrap();
/// let out = median_filter(&buf, 3).unwrap();
/// assert!(out.data().iter().all(|&v| v == 100));
/// ```
pub fn median_filter(buf: &PixelBuffer, size: u32) -> FilterResult<PixelBuffer> {
    rank_filter(buf, size, 0.5)
}

/// Apply minimum filter (rank = 0.0).
pub fn min_filter(buf: &PixelBuffer, size: u32) -> FilterResult<PixelBuffer> {
    rank_filter(buf, size, 0.0)
}

/// Apply maximum filter (rank = 1.0).
pub fn max_filter(buf: &PixelBuffer, size: u32) -> FilterResult<PixelBuffer> {
    rank_filter(buf, size, 1.0)
}

/// Apply rank filter with clamp-to-edge borders.
///
/// # Arguments
/// * `buf` - Input image
/// * `size` - Window side (odd)
/// * `rank` - Rank value in [0.0, 1.0] (0.0=min, 0.5=median, 1.0=max)
pub fn rank_filter(buf: &PixelBuffer, size: u32, rank: f64) -> FilterResult<PixelBuffer> {
    rank_filter_with_border(buf, size, rank, BorderMode::Clamp)
}

/// Apply rank filter with an explicit border policy.
///
/// The selected window index is `round(rank * (size² - 1))`.
pub fn rank_filter_with_border(
    buf: &PixelBuffer,
    size: u32,
    rank: f64,
    border: BorderMode,
) -> FilterResult<PixelBuffer> {
    check_window(buf, size)?;
    if !(0.0..=1.0).contains(&rank) {
        return Err(FilterError::InvalidParameters(format!(
            "rank must be in [0.0, 1.0], got {rank}"
        )));
    }

    let w = buf.width();
    let h = buf.height();
    let spp = buf.spp();
    let n = (size * size) as usize;
    let index = (rank * (n - 1) as f64).round() as usize;
    let r = (size / 2) as i64;
    debug!(w, h, spp, size, rank, index, ?border, "rank_filter");

    let mut out = buf.create_template()?;
    let src = buf.data();
    let mut window: Vec<u8> = Vec::with_capacity(n);
    let mut rows = vec![0u32; size as usize];
    let mut cols = vec![0u32; size as usize];

    for y in 0..h {
        for (k, row) in rows.iter_mut().enumerate() {
            *row = border.resolve(y as i64 + k as i64 - r, h);
        }
        for x in 0..w {
            for (k, col) in cols.iter_mut().enumerate() {
                *col = border.resolve(x as i64 + k as i64 - r, w);
            }
            for ch in 0..spp {
                window.clear();
                for &sy in &rows {
                    for &sx in &cols {
                        window.push(src[buf.offset_unchecked(sx, sy, ch)]);
                    }
                }
                let (_, &mut v, _) = window.select_nth_unstable(index);
                out.set_sample_unchecked(x, y, ch, v);
            }
        }
    }

    Ok(out)
}

fn check_window(buf: &PixelBuffer, size: u32) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "window size must be odd and positive, got {size}"
        )));
    }
    if size > buf.width() || size > buf.height() {
        return Err(FilterError::InvalidParameters(format!(
            "window size {} exceeds image {}x{}",
            size,
            buf.width(),
            buf.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkit_core::Channels;

    fn noisy(w: u32, h: u32, channels: Channels) -> PixelBuffer {
        let n = (w * h * channels.count()) as usize;
        let data = (0..n).map(|i| ((i * 97 + 13) % 251) as u8).collect();
        PixelBuffer::from_vec(w, h, channels, data).unwrap()
    }

    #[test]
    fn test_median_uniform_identity() {
        for channels in [Channels::Gray, Channels::Rgb, Channels::Rgba] {
            let buf = PixelBuffer::filled(7, 5, channels, 42).unwrap();
            for size in [1, 3, 5] {
                assert_eq!(median_filter(&buf, size).unwrap(), buf);
            }
        }
    }

    #[test]
    fn test_median_removes_spike() {
        let mut buf = PixelBuffer::filled(3, 3, Channels::Gray, 100).unwrap();
        buf.set_sample(1, 1, 0, 255).unwrap();
        let out = median_filter(&buf, 3).unwrap();
        assert!(out.data().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_median_clamped_corner() {
        let buf = PixelBuffer::from_vec(3, 3, Channels::Gray, vec![10, 20, 30, 40, 50, 60, 70, 80, 90])
            .unwrap();
        let out = median_filter(&buf, 3).unwrap();
        // (0,0): 10,10,20,10,10,20,40,40,50 -> sorted index 4 = 20
        assert_eq!(out.get_sample(0, 0, 0), Some(20));
        assert_eq!(out.get_sample(1, 1, 0), Some(50));
    }

    #[test]
    fn test_min_max_bracket_median() {
        let buf = noisy(9, 8, Channels::Rgb);
        let lo = min_filter(&buf, 3).unwrap();
        let med = median_filter(&buf, 3).unwrap();
        let hi = max_filter(&buf, 3).unwrap();
        for ((&a, &b), &c) in lo.data().iter().zip(med.data()).zip(hi.data()) {
            assert!(a <= b && b <= c);
        }
    }

    #[test]
    fn test_rank_index_rounding() {
        // 1x1 window: any rank returns the sample itself.
        let buf = noisy(4, 4, Channels::Gray);
        assert_eq!(rank_filter(&buf, 1, 0.3).unwrap(), buf);
    }

    #[test]
    fn test_mirror_border() {
        let buf = PixelBuffer::from_vec(3, 3, Channels::Gray, vec![10, 20, 30, 40, 50, 60, 70, 80, 90])
            .unwrap();
        let out = rank_filter_with_border(&buf, 3, 0.0, BorderMode::Mirror).unwrap();
        // (0,0) mirrored window covers rows {1,0,1} cols {1,0,1}: min 10
        assert_eq!(out.get_sample(0, 0, 0), Some(10));
        let out = rank_filter_with_border(&buf, 3, 1.0, BorderMode::Mirror).unwrap();
        assert_eq!(out.get_sample(0, 0, 0), Some(50));
    }

    #[test]
    fn test_invalid_params() {
        let buf = noisy(5, 5, Channels::Gray);
        assert!(matches!(
            median_filter(&buf, 0),
            Err(FilterError::InvalidParameters(_))
        ));
        assert!(median_filter(&buf, 4).is_err());
        assert!(median_filter(&buf, 7).is_err());
        assert!(rank_filter(&buf, 3, 1.5).is_err());
        assert!(rank_filter(&buf, 3, -0.1).is_err());
        assert!(rank_filter(&buf, 3, f64::NAN).is_err());
    }
}
