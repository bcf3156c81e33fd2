//! File size helpers.
//!
//! Both return `0` for anything that is not a regular file (pipes,
//! directories, paths that cannot be stat-ted).

use std::fs::{self, File};
use std::path::Path;

/// Size in bytes of the open regular file `file`.
pub fn get_open_file_size(file: &File) -> u64 {
    file.metadata()
        .ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Size in bytes of the regular file at `path`.
pub fn get_file_size(path: &Path) -> u64 {
    fs::metadata(path)
        .ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
