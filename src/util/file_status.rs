//! File status checks.
//!
//! Thin wrappers over `std::fs::metadata` that answer yes/no questions;
//! a path that cannot be stat-ted is simply "not a file" / "not a
//! directory".

use std::fs;
use std::path::{Path, PathBuf};

/// Returns `true` if `path` refers to a regular file (following symlinks).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if `path` refers to a directory (following symlinks).
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// The directory an output file at `path` will be created in.
///
/// A bare file name has an empty parent; that resolves to `"."`.
pub fn output_parent(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Returns `true` if the directory that would hold `path` exists.
pub fn parent_exists(path: &Path) -> bool {
    is_directory(&output_parent(path))
}

/// Returns `true` if `a` and `b` name the same existing file.
///
/// On unix the device and inode numbers are compared, so hard links and
/// symlinks to one file match. Elsewhere paths are compared after
/// canonicalisation, so `./x` and `x` match. A path that does not exist
/// never matches anything.
pub fn same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        match (fs::metadata(a), fs::metadata(b)) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
