//! Capegen Core - Placeholder texture generation library
//!
//! This crate provides the core functionality for Capegen: encoding a
//! fixed-size, fully transparent RGBA PNG and writing it to an asset path,
//! creating parent directories as needed.

pub mod encode;
pub mod texture;

pub use encode::{build_chunk, encode_png, EncodeError, PNG_SIGNATURE};
pub use texture::{generate_cape_texture, write_texture, TextureError};

/// Width of the cape texture in pixels.
pub const CAPE_WIDTH: u32 = 64;

/// Height of the cape texture in pixels.
pub const CAPE_HEIGHT: u32 = 32;

/// Relative output path for the cape texture asset.
pub const CAPE_PATH_SEGMENTS: [&str; 5] = ["assets", "minecraft", "textures", "entity", "cape.png"];

/// Build the relative output path for the cape texture.
pub fn cape_texture_path() -> std::path::PathBuf {
    CAPE_PATH_SEGMENTS.iter().collect()
}
