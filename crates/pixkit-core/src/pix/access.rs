//! Sample access functions
//!
//! Checked and unchecked getters/setters for individual samples and pixels.
//! "Unchecked" here only means no coordinate validation is done up front;
//! the final slice index is still bounds-checked by Rust, so a bad
//! coordinate panics instead of reading a neighbouring row.

use super::PixelBuffer;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Linear offset of sample `(x, y, ch)`.
    ///
    /// Returns `None` if any coordinate is out of range.
    #[inline]
    pub fn offset(&self, x: u32, y: u32, ch: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() || ch >= self.spp() {
            return None;
        }
        Some(self.offset_unchecked(x, y, ch))
    }

    /// Linear offset of sample `(x, y, ch)` without range checks.
    #[inline]
    pub fn offset_unchecked(&self, x: u32, y: u32, ch: u32) -> usize {
        (y as usize * self.width() as usize + x as usize) * self.spp() as usize + ch as usize
    }

    /// Get a sample value at `(x, y, ch)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32, ch: u32) -> Option<u8> {
        self.offset(x, y, ch).map(|i| self.data()[i])
    }

    /// Get a sample value without coordinate validation.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the buffer.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32, ch: u32) -> u8 {
        self.data()[self.offset_unchecked(x, y, ch)]
    }

    /// Set a sample value at `(x, y, ch)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, ch: u32, val: u8) -> Result<()> {
        let i = self.offset(x, y, ch).ok_or(Error::OutOfBounds {
            x,
            y,
            channel: ch,
            width: self.width(),
            height: self.height(),
        })?;
        self.data_mut()[i] = val;
        Ok(())
    }

    /// Set a sample value without coordinate validation.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is past the end of the buffer.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, ch: u32, val: u8) {
        let i = self.offset_unchecked(x, y, ch);
        self.data_mut()[i] = val;
    }

    /// Get all samples of pixel `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        let start = self.offset(x, y, 0)?;
        Some(&self.data()[start..start + self.spp() as usize])
    }

    /// Get all samples of pixel `(x, y)` for writing.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        let start = self.offset(x, y, 0)?;
        let spp = self.spp() as usize;
        Some(&mut self.data_mut()[start..start + spp])
    }

    /// Overwrite every sample of pixel `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for bad coordinates and
    /// [`Error::DataLength`] if `samples` is not `spp` long.
    pub fn set_pixel(&mut self, x: u32, y: u32, samples: &[u8]) -> Result<()> {
        let spp = self.spp() as usize;
        if samples.len() != spp {
            return Err(Error::DataLength {
                expected: spp,
                actual: samples.len(),
            });
        }
        let (width, height) = (self.width(), self.height());
        let dst = self.get_pixel_mut(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            channel: 0,
            width,
            height,
        })?;
        dst.copy_from_slice(samples);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channels, Error, PixelBuffer};

    #[test]
    fn test_offset_formula() {
        let buf = PixelBuffer::new(5, 4, Channels::Rgb).unwrap();
        assert_eq!(buf.offset(0, 0, 0), Some(0));
        assert_eq!(buf.offset(1, 0, 2), Some(5));
        assert_eq!(buf.offset(2, 3, 1), Some((3 * 5 + 2) * 3 + 1));
        assert_eq!(buf.offset(5, 0, 0), None);
        assert_eq!(buf.offset(0, 4, 0), None);
        assert_eq!(buf.offset(0, 0, 3), None);
    }

    #[test]
    fn test_get_set_sample() {
        let mut buf = PixelBuffer::new(3, 3, Channels::Gray).unwrap();
        buf.set_sample(1, 2, 0, 77).unwrap();
        assert_eq!(buf.get_sample(1, 2, 0), Some(77));
        assert_eq!(buf.get_sample_unchecked(1, 2, 0), 77);
        assert_eq!(buf.get_sample(3, 0, 0), None);
        assert!(matches!(
            buf.set_sample(0, 3, 0, 1),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_set_pixel() {
        let mut buf = PixelBuffer::new(2, 2, Channels::Rgba).unwrap();
        buf.set_pixel(1, 1, &[10, 20, 30, 40]).unwrap();
        assert_eq!(buf.get_pixel(1, 1), Some(&[10u8, 20, 30, 40][..]));
        assert!(buf.set_pixel(1, 1, &[1, 2, 3]).is_err());
        assert!(buf.set_pixel(2, 0, &[1, 2, 3, 4]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_unchecked_access_panics_past_end() {
        let buf = PixelBuffer::new(2, 2, Channels::Gray).unwrap();
        let _ = buf.get_sample_unchecked(0, 2, 0);
    }
}
