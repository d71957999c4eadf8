//! Histogram generation for PixelBuffer images
//!
//! Only channel 0 is counted; for colour buffers the remaining channels are
//! skipped by stepping one whole pixel at a time.

use super::PixelBuffer;

/// 256-bin histogram of channel-0 samples, with its cumulative sums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
    cdf: [u64; 256],
}

impl Histogram {
    /// Count the channel-0 samples of `buf`.
    ///
    /// # Example
    ///
    /// ```
    /// use pixkit_core::{Channels, Histogram, PixelBuffer};
    ///
    /// let buf = PixelBuffer::from_vec(2, 2, Channels::Gray, vec![0, 85, 170, 255]).unwrap();
    /// let hist = Histogram::from_channel0(&buf);
    /// assert_eq!(hist.cdf()[255], 4);
    /// assert_eq!(hist.cdf_min(), 1);
    /// ```
    pub fn from_channel0(buf: &PixelBuffer) -> Self {
        let mut counts = [0u64; 256];
        for px in buf.pixels() {
            counts[px[0] as usize] += 1;
        }

        let mut cdf = [0u64; 256];
        let mut running = 0u64;
        for (c, &n) in cdf.iter_mut().zip(counts.iter()) {
            running += n;
            *c = running;
        }

        Histogram { counts, cdf }
    }

    /// Per-value counts.
    #[inline]
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Cumulative counts: `cdf()[v]` is the number of samples `<= v`.
    #[inline]
    pub fn cdf(&self) -> &[u64; 256] {
        &self.cdf
    }

    /// First nonzero cumulative count (0 only for an empty histogram).
    pub fn cdf_min(&self) -> u64 {
        self.cdf.iter().copied().find(|&c| c != 0).unwrap_or(0)
    }

    /// Total number of counted samples.
    #[inline]
    pub fn total(&self) -> u64 {
        self.cdf[255]
    }
}
