//! pixkit-filter - Image filtering operations
//!
//! This crate provides neighbourhood and tone filters over
//! [`pixkit_core::PixelBuffer`]:
//!
//! - Convolution with arbitrary square kernels
//! - Gaussian blur
//! - Sharpening and Laplacian edge detection
//! - Rank filtering (median, min, max filters)
//! - Histogram equalization

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;
pub mod rank;

pub use error::{FilterError, FilterResult};
pub use kernel::{FixedPattern, Kernel};

// Re-export commonly used functions
pub use convolve::{convolve, convolve_with_border, gaussian_blur};
pub use edge::{edge_detect, sharpen};
pub use enhance::{TrcLut, equalize_histogram, equalize_trc, trc_map};
pub use rank::{max_filter, median_filter, min_filter, rank_filter, rank_filter_with_border};
