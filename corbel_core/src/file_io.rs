//! # File I/O Module
//!
//! File operations shared by the export layer and the front ends:
//! - **Atomic writes**: write to `.tmp`, sync, rename to prevent torn files
//! - **Input files**: load/save a [`CorbelInput`] as JSON
//!
//! Loading an input file does not validate it; validation happens in
//! [`crate::calculations::corbel::evaluate`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use corbel_core::calculations::CorbelInput;
//! use corbel_core::file_io::{load_input, save_input};
//! use std::path::Path;
//!
//! let path = Path::new("console.json");
//! save_input(&CorbelInput::default(), path)?;
//! let input = load_input(path)?;
//! assert_eq!(input.fed_kn, 32.25);
//! # Ok::<(), corbel_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::calculations::corbel::CorbelInput;
use crate::errors::{CalcError, CalcResult};

/// Temporary sibling path used during an atomic write
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp.set_extension(extension);
    tmp
}

/// Write bytes to `path` atomically.
///
/// 1. Write to a temporary file next to the target
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
pub fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Read a whole file into a string
pub fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a corbel input as pretty JSON
pub fn save_input(input: &CorbelInput, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(input)?;
    write_atomic(path, json.as_bytes())
}

/// Load a corbel input from JSON
pub fn load_input(path: &Path) -> CalcResult<CorbelInput> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}
