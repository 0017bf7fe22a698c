//! Capegen CLI - generate the transparent cape placeholder texture.
//!
//! Running the binary takes no arguments: it encodes the fixed-size
//! transparent PNG and writes it to `assets/minecraft/textures/entity/cape.png`
//! relative to the working directory, creating missing directories. A failed
//! write exits non-zero with the underlying I/O error displayed.

use std::process::ExitCode;

use capegen_core::{cape_texture_path, generate_cape_texture};

fn main() -> ExitCode {
    env_logger::init();

    let path = cape_texture_path();
    match generate_cape_texture(&path) {
        Ok(()) => {
            println!("Wrote transparent PNG: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to write {}: {}", path.display(), e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
