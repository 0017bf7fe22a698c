//! Minimal PNG encoding for the placeholder texture.
//!
//! This module hand-rolls the small subset of the PNG container format the
//! placeholder needs: the fixed 8-byte signature followed by an IHDR chunk, a
//! single IDAT chunk (zlib-compressed raster via `flate2`), and an empty IEND
//! chunk. Chunk checksums use `crc32fast`.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use thiserror::Error;

/// The fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Bit depth of the emitted image (8 bits per channel).
const BIT_DEPTH: u8 = 8;

/// PNG color type 6: truecolor with alpha.
const COLOR_TYPE_RGBA: u8 = 6;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The deflate compressor failed
    #[error("Compression failed: {0}")]
    CompressionFailed(String),
}

/// Build a single PNG chunk from a tag and payload.
///
/// A chunk is the 4-byte big-endian payload length, the 4-byte ASCII tag, the
/// payload itself, and a 4-byte big-endian CRC-32 computed over tag + payload.
///
/// # Arguments
///
/// * `tag` - 4-byte ASCII chunk tag (e.g. `b"IHDR"`)
/// * `payload` - Chunk payload bytes (may be empty)
///
/// # Returns
///
/// The complete chunk byte sequence. This is a pure, total function: it has no
/// failure modes.
pub fn build_chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(12 + payload.len());
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(tag);
    chunk.extend_from_slice(payload);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());

    chunk
}

/// Encode a fully transparent RGBA image as a complete PNG byte stream.
///
/// The output is a valid PNG restricted to exactly three chunks in order:
/// IHDR (bit depth 8, color type 6, no interlacing), a single IDAT holding
/// the zlib-compressed raster, and IEND. Every pixel is transparent black
/// (0, 0, 0, 0) and every scanline uses filter type 0 (no filtering).
///
/// # Arguments
///
/// * `width` - Image width in pixels (non-zero)
/// * `height` - Image height in pixels (non-zero)
///
/// # Returns
///
/// The PNG file bytes on success. Output is deterministic: two calls with the
/// same dimensions produce byte-identical results.
pub fn encode_png(width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // IHDR payload: width, height (big-endian), bit depth, color type, then
    // compression method, filter method and interlace method (all zero)
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    // Raster buffer: each scanline is 1 filter byte (0) followed by
    // width * 4 RGBA bytes, all zero
    let stride = 1 + (width as usize) * 4;
    let raw = vec![0u8; (height as usize) * stride];

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&raw)
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;

    log::debug!(
        "Encoded {}x{} transparent raster: {} raw bytes -> {} compressed",
        width,
        height,
        raw.len(),
        compressed.len()
    );

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + 12 + ihdr.len() + 12 + compressed.len() + 12);
    png.extend_from_slice(&PNG_SIGNATURE);
    png.extend_from_slice(&build_chunk(b"IHDR", &ihdr));
    png.extend_from_slice(&build_chunk(b"IDAT", &compressed));
    png.extend_from_slice(&build_chunk(b"IEND", &[]));

    Ok(png)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
