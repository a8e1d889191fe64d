//! Program Image Loader.
//!
//! This module reads raw binary program images from disk. It performs:
//! 1. **Binary loading:** Reads a bare-metal image into a byte buffer.
//! 2. **Placement:** Copies the bytes unchanged into sparse memory at a load offset.
//!
//! Images carry no headers; byte `i` of the file lands at address `offset + i`.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;
use crate::core::memory::SparseMemory;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// Returns [`SimError::Load`] if the file cannot be read.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, SimError> {
    fs::read(path).map_err(|source| SimError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the image at `path` and copies it into `mem` starting at `offset`.
///
/// # Returns
///
/// The number of bytes loaded.
///
/// # Errors
///
/// Returns [`SimError::Load`] if the file cannot be read.
pub fn load_image(mem: &mut SparseMemory, path: &Path, offset: u32) -> Result<usize, SimError> {
    let data = load_binary(path)?;
    mem.load_binary_at(&data, offset);
    tracing::info!(
        path = %path.display(),
        bytes = data.len(),
        offset = format_args!("{offset:#010x}"),
        "loaded program image"
    );
    Ok(data.len())
}
