//! PixelBuffer - The main image container
//!
//! # Sample layout
//!
//! - Samples are unsigned 8-bit, interleaved per pixel
//! - Rows are stored top to bottom with no padding
//! - Sample `(x, y, ch)` lives at `(y * width + x) * channels + ch`
//!
//! # Ownership model
//!
//! A `PixelBuffer` owns its samples exclusively. Filters that produce a new
//! image take `&PixelBuffer` and return a fresh buffer; the in-place filters
//! (grayscale reduction, histogram equalization) take `&mut PixelBuffer`.

mod access;
mod convert;
mod histogram;

pub use histogram::Histogram;

use crate::error::{Error, Result};
use std::path::Path;

/// Samples per pixel
///
/// The discriminant is the number of interleaved samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single-channel grayscale
    Gray = 1,
    /// Red, green, blue
    Rgb = 3,
    /// Red, green, blue, alpha
    Rgba = 4,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `count` is not 1, 3, or 4.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            _ => Err(Error::InvalidChannels(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }

    /// Whether the pixel carries colour samples (channels 1 and 2).
    #[inline]
    pub fn has_color(self) -> bool {
        self.count() >= 3
    }
}

/// Encoded image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG (lossless)
    Png,
    /// JFIF JPEG (lossy)
    Jpeg,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Select a format from a file extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            _ => Self::Unknown,
        }
    }

    /// Select a format from the extension of `path`.
    ///
    /// Paths without an extension give [`ImageFormat::Unknown`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }
}

/// Interleaved 8-bit image buffer
///
/// # Examples
///
/// ```
/// use pixkit_core::{Channels, PixelBuffer};
///
/// let buf = PixelBuffer::new(640, 480, Channels::Rgb).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.data().len(), 640 * 480 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Interleaved samples, row-major
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::AllocationFailed`] if the sample storage cannot be reserved.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Self::filled(width, height, channels, 0)
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let len = Self::sample_count(width, height, channels)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed(len))?;
        data.resize(len, value);
        Ok(PixelBuffer {
            width,
            height,
            channels,
            data,
        })
    }

    /// Wrap existing interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len()` is not
    /// `width * height * channels`.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = Self::sample_count(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            channels,
            data,
        })
    }

    /// Number of samples for the given geometry, rejecting empty images and
    /// sizes that overflow `usize`.
    fn sample_count(width: u32, height: u32, channels: Channels) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels.count() as usize))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.channels.count()
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw access to the samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * self.spp() as usize;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate over pixels as `spp`-sized slices in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.spp() as usize)
    }

    /// Iterate mutably over pixels as `spp`-sized slices in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let spp = self.spp() as usize;
        self.data.chunks_exact_mut(spp)
    }

    /// Create a zero-filled buffer with the same geometry.
    pub fn create_template(&self) -> Result<Self> {
        Self::new(self.width, self.height, self.channels)
    }

    /// Check if two buffers have the same width, height, and channel layout.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }
}
