//! Histogram equalization
//!
//! The channel-0 histogram of the image is turned into a 256-entry tone
//! reproduction curve (TRC) and every pixel is remapped through it. For
//! colour images the result is written into channels 0, 1 and 2, so the
//! output is gray; alpha is left alone.

use crate::FilterResult;
use pixkit_core::{Histogram, PixelBuffer};
use tracing::debug;

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input sample values [0..255] to output sample values [0..255].
pub type TrcLut = [u8; 256];

/// Generate the histogram equalization TRC for a histogram.
///
/// `lut[v] = (cdf[v] - cdf_min) * 255 / (N - cdf_min)` in integer
/// arithmetic, where `cdf_min` is the first nonzero cumulative count.
/// Values that never occur below `cdf_min` saturate at 0. When every
/// sample shares one value (`N == cdf_min`) the whole table is 0.
pub fn equalize_trc(hist: &Histogram) -> TrcLut {
    let total = hist.total();
    let cdf_min = hist.cdf_min();
    let range = total - cdf_min;

    let mut lut = [0u8; 256];
    if range == 0 {
        return lut;
    }
    for (entry, &c) in lut.iter_mut().zip(hist.cdf()) {
        let num = c.saturating_sub(cdf_min);
        *entry = (num * 255 / range).min(255) as u8;
    }
    lut
}

/// Apply a TRC to channel 0 of every pixel, copying the result into
/// channels 1 and 2 when the image has colour.
pub fn trc_map(buf: &mut PixelBuffer, lut: &TrcLut) {
    let color = buf.channels().has_color();
    for px in buf.pixels_mut() {
        let v = lut[px[0] as usize];
        px[0] = v;
        if color {
            px[1] = v;
            px[2] = v;
        }
    }
}

/// Equalize the channel-0 histogram of `buf` in place.
///
/// # Example
///
/// ```
/// use pixkit_core::{Channels, PixelBuffer};
/// use pixkit_filter::equalize_histogram;
///
/// let mut buf = PixelBuffer::from_vec(2, 2, Channels::Gray, vec![0, 85, 170, 255]).unwrap();
/// equalize_histogram(&mut buf).unwrap();
/// assert_eq!(buf.data(), &[0, 85, 170, 255]);
/// ```
pub fn equalize_histogram(buf: &mut PixelBuffer) -> FilterResult<()> {
    let hist = Histogram::from_channel0(buf);
    debug!(
        total = hist.total(),
        cdf_min = hist.cdf_min(),
        "equalize_histogram"
    );
    let lut = equalize_trc(&hist);
    trc_map(buf, &lut);
    Ok(())
}
