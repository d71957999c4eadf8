//! pixkit-transform - Geometric transformations for pixkit
//!
//! This crate provides:
//!
//! - Rotation by an arbitrary angle about the image centre (forward or
//!   inverse mapping)
//! - Bicubic (Catmull-Rom) scaling by factors or to an exact size

mod error;
pub mod rotate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use rotate::{RotateFill, RotateMethod, RotateOptions, rotate, rotate_with_options};
pub use scale::{cubic_weight, scale, scale_to_size};
