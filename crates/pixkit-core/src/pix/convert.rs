//! Grayscale reduction
//!
//! Reduces every pixel to the rounded mean of its samples and writes that
//! value back into each channel, so the buffer keeps its channel layout.
//! Alpha, when present, takes part in the mean and is overwritten too.

use super::PixelBuffer;

impl PixelBuffer {
    /// Convert to gray in place and return `self` for chaining.
    ///
    /// For each pixel `gray = (sum + spp / 2) / spp` in integer arithmetic.
    /// Single-channel buffers are left as they are. Applying the conversion
    /// twice gives the same result as applying it once.
    ///
    /// # Example
    ///
    /// ```
    /// use pixkit_core::{Channels, PixelBuffer};
    ///
    /// let mut buf = PixelBuffer::from_vec(1, 1, Channels::Rgb, vec![10, 20, 31]).unwrap();
    /// buf.convert_to_gray_in_place();
    /// assert_eq!(buf.data(), &[20, 20, 20]);
    /// ```
    pub fn convert_to_gray_in_place(&mut self) -> &mut Self {
        let spp = self.spp();
        if spp == 1 {
            return self;
        }
        for px in self.pixels_mut() {
            let gray = mean_sample(px, spp);
            px.fill(gray);
        }
        self
    }

    /// Copying variant of [`convert_to_gray_in_place`](Self::convert_to_gray_in_place).
    pub fn convert_to_gray(&self) -> PixelBuffer {
        let mut out = self.clone();
        out.convert_to_gray_in_place();
        out
    }
}

#[inline]
fn mean_sample(px: &[u8], spp: u32) -> u8 {
    let sum: u32 = px.iter().map(|&s| s as u32).sum();
    ((sum + spp / 2) / spp) as u8
}
