//! PNG image format support
//!
//! Decoding expands palettes and low bit depths and strips 16-bit samples,
//! so every PNG arrives as 8-bit samples:
//!
//! | PNG color type   | Channels |
//! |------------------|----------|
//! | Grayscale        | Gray     |
//! | Grayscale+alpha  | Rgba (gray replicated into R, G, B) |
//! | RGB / Indexed    | Rgb      |
//! | RGBA             | Rgba     |

use crate::{IoError, IoResult};
use pixkit_core::{Channels, PixelBuffer};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let (channels, src_spp) = match color_type {
        ColorType::Grayscale => (Channels::Gray, 1),
        ColorType::GrayscaleAlpha => (Channels::Rgba, 2),
        ColorType::Rgb => (Channels::Rgb, 3),
        ColorType::Rgba => (Channels::Rgba, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let mut pix = PixelBuffer::new(width, height, channels)?;
    let row_len = width as usize * src_spp;
    if data.len() < (height as usize - 1) * bytes_per_row + row_len {
        return Err(IoError::InvalidData("PNG frame shorter than image".to_string()));
    }
    let samples = (0..height as usize).flat_map(|y| {
        let start = y * bytes_per_row;
        data[start..start + row_len].chunks_exact(src_spp)
    });
    for (px, src) in pix.pixels_mut().zip(samples) {
        if color_type == ColorType::GrayscaleAlpha {
            px.copy_from_slice(&[src[0], src[0], src[0], src[1]]);
        } else {
            px.copy_from_slice(src);
        }
    }

    Ok(pix)
}

/// Write a PNG image
pub fn write_png<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    let color_type = match pix.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::Rgb => ColorType::Rgb,
        Channels::Rgba => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(pix: &PixelBuffer) -> PixelBuffer {
        let mut out = Vec::new();
        write_png(pix, &mut out).unwrap();
        read_png(Cursor::new(out)).unwrap()
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let data: Vec<u8> = (0..35).map(|i| (i * 7) as u8).collect();
        let pix = PixelBuffer::from_vec(7, 5, Channels::Gray, data).unwrap();
        assert_eq!(roundtrip(&pix), pix);
    }

    #[test]
    fn test_png_roundtrip_rgb_rgba() {
        let data: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 11 % 256) as u8).collect();
        let pix = PixelBuffer::from_vec(4, 3, Channels::Rgb, data).unwrap();
        assert_eq!(roundtrip(&pix), pix);

        let data: Vec<u8> = (0..4 * 3 * 4).map(|i| (255 - i * 5) as u8).collect();
        let pix = PixelBuffer::from_vec(4, 3, Channels::Rgba, data).unwrap();
        assert_eq!(roundtrip(&pix), pix);
    }

    #[test]
    fn test_png_gray_alpha_expands_to_rgba() {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, 2, 1);
            encoder.set_color(ColorType::GrayscaleAlpha);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[10, 200, 90, 255]).unwrap();
            writer.finish().unwrap();
        }
        let pix = read_png(Cursor::new(out)).unwrap();
        assert_eq!(pix.channels(), Channels::Rgba);
        assert_eq!(pix.data(), &[10, 10, 10, 200, 90, 90, 90, 255]);
    }

    #[test]
    fn test_png_garbage_is_decode_error() {
        let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
        assert!(matches!(
            read_png(Cursor::new(bytes)),
            Err(IoError::DecodeError(_))
        ));
    }
}
