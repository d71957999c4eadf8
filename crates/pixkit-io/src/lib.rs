//! pixkit-io - Image I/O for pixkit
//!
//! Reads PNG and JPEG files into [`PixelBuffer`]s and writes them back out.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | Yes  | Yes   | `png-format` |
//! | JPEG   | Yes  | Yes   | `jpeg`       |
//!
//! Reading identifies the format from the file's magic bytes. Writing picks
//! the format from the destination extension (`.png`, `.jpg`, `.jpeg`) and
//! encodes the whole image in memory before creating the file, so an
//! encoder failure never leaves a partial file behind.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use pixkit_core::ImageFormat;

use pixkit_core::PixelBuffer;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Options controlling how images are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { jpeg_quality: 100 }
    }
}

impl WriteOptions {
    /// Set the JPEG quality.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }
}

/// Read an image from a file, detecting the format from its content.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let pix = read_image_mem(&data)?;
    debug!(
        path = %path.display(),
        width = pix.width(),
        height = pix.height(),
        channels = pix.spp(),
        "read image"
    );
    Ok(pix)
}

/// Decode an image held in memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(std::io::Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data),
        format => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            format
        ))),
    }
}

/// Write an image with default options, choosing the format from the
/// path's extension.
pub fn write_image<P: AsRef<Path>>(pix: &PixelBuffer, path: P) -> IoResult<()> {
    write_image_with_options(pix, path, &WriteOptions::default())
}

/// Write an image, choosing the format from the path's extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for extensions other than `png`,
/// `jpg` and `jpeg`; nothing is written in that case.
pub fn write_image_with_options<P: AsRef<Path>>(
    pix: &PixelBuffer,
    path: P,
    options: &WriteOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path);
    if format == ImageFormat::Unknown {
        return Err(IoError::UnsupportedFormat(format!(
            "cannot infer output format from '{}'",
            path.display()
        )));
    }
    let bytes = write_image_mem(pix, format, options)?;
    fs::write(path, &bytes)?;
    debug!(path = %path.display(), ?format, bytes = bytes.len(), "wrote image");
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(
    pix: &PixelBuffer,
    format: ImageFormat,
    options: &WriteOptions,
) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, &mut out)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, &mut out, options.jpeg_quality)?,
        format => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot encode {:?}",
                format
            )));
        }
    }
    #[cfg(not(feature = "jpeg"))]
    let _ = options;
    Ok(out)
}
