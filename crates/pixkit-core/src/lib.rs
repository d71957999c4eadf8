//! pixkit core - Basic data structures for raster filtering
//!
//! This crate provides the pieces every filter in the workspace shares:
//!
//! - [`PixelBuffer`] - The interleaved 8-bit image container
//! - [`Channels`] - Samples per pixel (gray, RGB, RGBA)
//! - [`BorderMode`] - Out-of-range neighbour resolution (clamp or mirror)
//! - [`Histogram`] - 256-bin channel-0 histogram and its CDF
//! - Grayscale reduction ([`PixelBuffer::convert_to_gray_in_place`])

pub mod border;
pub mod error;
pub mod pix;

pub use border::{BorderMode, clamp_coord, mirror_coord};
pub use error::{Error, Result};
pub use pix::{Channels, Histogram, ImageFormat, PixelBuffer};
