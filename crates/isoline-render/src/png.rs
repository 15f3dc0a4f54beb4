//! PNG encoding for RGBA canvases.
//!
//! Writes 8-bit truecolor-with-alpha images (color type 6) with a single
//! IDAT chunk and no scanline filtering.

use crate::error::{RenderError, Result};
use std::io::Write;

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode straight RGBA pixels (4 bytes per pixel, row-major) as a PNG.
pub fn encode_rgba(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(RenderError::encode(format!(
            "image dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(RenderError::encode(format!(
            "expected {} RGBA bytes for {}x{}, got {}",
            expected,
            width,
            height,
            pixels.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type (RGBA)
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    let idat = deflate_scanlines(pixels, width as usize, height as usize)?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Length, type, data, then CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let stride = width * 4;
    let mut raw = Vec::with_capacity(height * (1 + stride));
    for row in pixels.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}
