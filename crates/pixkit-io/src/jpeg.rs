//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale and RGB JPEGs are supported; alpha is dropped
//! on write since JFIF has no alpha channel.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use pixkit_core::{Channels, PixelBuffer};
use std::io::Read;

/// Default JPEG quality used when writing.
pub const DEFAULT_QUALITY: u8 = 100;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// A `Gray` buffer for 8-bit grayscale JPEGs, `Rgb` for colour ones.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => Channels::Gray,
        PixelFormat::RGB24 => Channels::Rgb,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(PixelBuffer::from_vec(
        info.width as u32,
        info.height as u32,
        channels,
        data,
    )?)
}

/// Write a JPEG image into `out` at the given quality (1-100).
pub fn write_jpeg(pix: &PixelBuffer, out: &mut Vec<u8>, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality must be in 1..=100, got {}",
            quality
        )));
    }
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("width {} too large for JPEG", pix.width())))?;
    let height = u16::try_from(pix.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} too large for JPEG", pix.height()))
    })?;
    let color_type = match pix.channels() {
        Channels::Gray => ColorType::Luma,
        Channels::Rgb => ColorType::Rgb,
        Channels::Rgba => ColorType::Rgba,
    };

    let encoder = Encoder::new(out, quality);
    encoder
        .encode(pix.data(), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_jpeg_uniform_gray_survives() {
        let pix = PixelBuffer::filled(16, 16, Channels::Gray, 128).unwrap();
        let mut out = Vec::new();
        write_jpeg(&pix, &mut out, DEFAULT_QUALITY).unwrap();
        assert_eq!(&out[..2], &[0xFF, 0xD8]);

        let back = read_jpeg(Cursor::new(out)).unwrap();
        assert_eq!(back.channels(), Channels::Gray);
        assert_eq!((back.width(), back.height()), (16, 16));
        assert!(back.data().iter().all(|&v| v.abs_diff(128) <= 2));
    }

    #[test]
    fn test_jpeg_rgba_drops_alpha() {
        let pix = PixelBuffer::filled(8, 8, Channels::Rgba, 200).unwrap();
        let mut out = Vec::new();
        write_jpeg(&pix, &mut out, 90).unwrap();
        let back = read_jpeg(Cursor::new(out)).unwrap();
        assert_eq!(back.channels(), Channels::Rgb);
    }

    #[test]
    fn test_jpeg_quality_range() {
        let pix = PixelBuffer::filled(2, 2, Channels::Gray, 0).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            write_jpeg(&pix, &mut out, 0),
            Err(IoError::EncodeError(_))
        ));
        assert!(write_jpeg(&pix, &mut out, 101).is_err());
    }

    #[test]
    fn test_jpeg_too_wide() {
        let pix = PixelBuffer::new(70_000, 1, Channels::Gray).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            write_jpeg(&pix, &mut out, 80),
            Err(IoError::EncodeError(_))
        ));
    }
}
