//! PNG encoding pipeline for Capegen.
//!
//! This module provides functionality for:
//! - Building individual PNG chunks (length, tag, payload, CRC-32)
//! - Encoding a fully transparent RGBA raster as a complete PNG byte stream
//!
//! # Architecture
//!
//! The encoder is deliberately minimal: it emits exactly three chunks
//! (IHDR, one IDAT, IEND), always bit depth 8, color type 6 (RGBA), no
//! interlacing, no filtering. All operations are synchronous and
//! single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use capegen_core::encode::encode_png;
//!
//! let png = encode_png(64, 32).unwrap();
//! assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
//! ```

mod png;

pub use png::{build_chunk, encode_png, EncodeError, PNG_SIGNATURE};
