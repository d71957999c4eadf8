//! Error types for pixkit-core
//!
//! Provides a unified error type for buffer construction and sample access.
//! Filter and transform crates wrap this type through `#[from]` so that a
//! caller only ever matches on one error per crate.

use thiserror::Error;

/// pixkit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Unsupported number of interleaved channels
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    InvalidChannels(u32),

    /// Sample data does not match the declared geometry
    #[error("data length mismatch: expected {expected} samples, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Coordinate outside the buffer
    #[error("coordinate out of bounds: ({x}, {y}, ch {channel}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        channel: u32,
        width: u32,
        height: u32,
    },

    /// Memory allocation failed
    #[error("memory allocation failed for {0} elements")]
    AllocationFailed(usize),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
