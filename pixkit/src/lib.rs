//! pixkit - Spatial-domain raster filters for Rust
//!
//! # Overview
//!
//! pixkit operates on decoded, interleaved 8-bit pixel buffers and provides:
//!
//! - Image I/O (PNG, JPEG)
//! - Median and general rank filtering
//! - Gaussian blur, sharpening and Laplacian edge detection
//! - Grayscale reduction and histogram equalization
//! - Rotation and bicubic resizing
//!
//! # Example
//!
//! ```
//! use pixkit::{Channels, PixelBuffer};
//!
//! let pix = PixelBuffer::filled(64, 48, Channels::Rgb, 128).unwrap();
//! let blurred = pixkit::filter::gaussian_blur(&pix, 5, 1.4).unwrap();
//! let half = pixkit::transform::scale(&blurred, 0.5, 0.5).unwrap();
//! assert_eq!((half.width(), half.height()), (32, 24));
//! ```

pub mod cli;
mod error;

pub use error::{Error, Result};

// Re-export core types (primary data structures used everywhere)
pub use pixkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixkit_filter as filter;
pub use pixkit_io as io;
pub use pixkit_transform as transform;
