//! Top-level error type
//!
//! Collects the per-crate errors so the command line has one type to report.

use thiserror::Error;

/// Errors surfaced by the `pixkit` facade and binary
#[derive(Debug, Error)]
pub enum Error {
    /// Bad command-line usage
    #[error("usage: {0}")]
    Usage(String),

    /// Decode or encode failure
    #[error(transparent)]
    Io(#[from] pixkit_io::IoError),

    /// Filter failure
    #[error(transparent)]
    Filter(#[from] pixkit_filter::FilterError),

    /// Transform failure
    #[error(transparent)]
    Transform(#[from] pixkit_transform::TransformError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;
