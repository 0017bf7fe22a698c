//! Texture asset writing for Capegen.
//!
//! This module provides functionality for:
//! - Writing encoded bytes to an asset path, creating parent directories
//! - Generating the transparent cape placeholder texture in one call
//!
//! Writes are plain whole-file writes: an existing file at the target path is
//! replaced in full, and no atomic-replace guarantee is made. I/O failures
//! surface to the caller unrecovered.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::encode::{encode_png, EncodeError};
use crate::{CAPE_HEIGHT, CAPE_WIDTH};

/// Errors that can occur while generating or writing a texture.
#[derive(Debug, Error)]
pub enum TextureError {
    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// Directory creation or file write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write encoded texture bytes to `path`, creating missing parent directories.
///
/// Any existing file at `path` is overwritten in full. Directory creation is
/// idempotent: already-existing parents are not an error.
///
/// # Arguments
///
/// * `path` - Target file path; relative paths resolve against the working directory
/// * `bytes` - Complete file contents to write
///
/// # Errors
///
/// Returns `TextureError::Io` if the directories cannot be created or the
/// write fails (permissions, disk full, invalid path).
pub fn write_texture(path: &Path, bytes: &[u8]) -> Result<(), TextureError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, bytes)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(())
}

/// Encode the fixed-size transparent cape texture and write it to `path`.
///
/// Equivalent to `encode_png(CAPE_WIDTH, CAPE_HEIGHT)` followed by
/// [`write_texture`].
///
/// # Errors
///
/// Returns an error if encoding fails or the filesystem write fails.
pub fn generate_cape_texture(path: &Path) -> Result<(), TextureError> {
    let png = encode_png(CAPE_WIDTH, CAPE_HEIGHT)?;
    write_texture(path, &png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Unique scratch directory under the system temp dir for one test.
    fn scratch_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("capegen-test-{}-{}", std::process::id(), name));
        // Start from a clean slate if a previous run left the directory behind
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn test_write_texture_creates_parent_directories() {
        let dir = scratch_dir("parents");
        let path = dir.join("textures").join("entity").join("cape.png");
        assert!(!path.parent().unwrap().exists());

        let png = encode_png(64, 32).unwrap();
        write_texture(&path, &png).unwrap();

        assert!(path.is_file());
        assert_eq!(fs::read(&path).unwrap(), png);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_texture_overwrites_existing_file() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("cape.png");

        // Seed the path with larger, unrelated content
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, vec![0xFFu8; 10_000]).unwrap();

        let png = encode_png(64, 32).unwrap();
        write_texture(&path, &png).unwrap();

        assert_eq!(fs::read(&path).unwrap(), png);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_texture_twice_is_not_cumulative() {
        let dir = scratch_dir("twice");
        let path = dir.join("cape.png");
        let png = encode_png(64, 32).unwrap();

        write_texture(&path, &png).unwrap();
        write_texture(&path, &png).unwrap();

        // Final content equals a fresh single encode, not a concatenation
        assert_eq!(fs::read(&path).unwrap(), png);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_texture_existing_parents_are_not_an_error() {
        let dir = scratch_dir("existing");
        let path = dir.join("entity").join("cape.png");
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        write_texture(&path, b"png").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"png");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generate_cape_texture_round_trip() {
        let dir = scratch_dir("generate");
        let path = dir.join("assets").join("entity").join("cape.png");

        generate_cape_texture(&path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes, encode_png(CAPE_WIDTH, CAPE_HEIGHT).unwrap());

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), CAPE_WIDTH);
        assert_eq!(decoded.height(), CAPE_HEIGHT);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_texture_unwritable_path_surfaces_io_error() {
        // A file used as a directory component makes create_dir_all fail
        let dir = scratch_dir("unwritable");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let result = write_texture(&blocker.join("cape.png"), b"png");
        assert!(matches!(result, Err(TextureError::Io(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
