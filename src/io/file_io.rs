//! File open primitives for the transform pipelines.
//!
//! - [`check_inputs`]    — preflight: every input must be a regular file.
//! - [`open_src_file`]   — open an input and record its length.
//! - [`create_dst_file`] — create (or truncate) an output behind a buffered writer.
//!
//! Failures come back as [`KefkaError`] values carrying the offending path.
//! Handles are closed when the returned values drop, on every exit path.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::KefkaError;
use crate::util::{get_open_file_size, is_reg_file};

/// Capacity of the write buffer in front of every destination file.
const DST_BUFFER_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Preflight
// ---------------------------------------------------------------------------

/// Returns the first input that is not an existing regular file as
/// [`KefkaError::InputNotFound`].
pub fn check_inputs(inputs: &[PathBuf]) -> Result<(), KefkaError> {
    match inputs.iter().find(|p| !is_reg_file(p)) {
        Some(missing) => Err(KefkaError::InputNotFound(missing.clone())),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// An open input together with the length it had when opened.
#[derive(Debug)]
pub struct SrcFile {
    pub file: File,
    pub len: u64,
}

impl Read for SrcFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// Opens `path` for reading.
///
/// Directories and other non-regular files are reported as
/// [`KefkaError::InputNotFound`]; open failures as
/// [`KefkaError::UnhandledIo`].
pub fn open_src_file(path: &Path) -> Result<SrcFile, KefkaError> {
    if !is_reg_file(path) {
        return Err(KefkaError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| KefkaError::io(path, e))?;
    let len = get_open_file_size(&file);
    crate::displaylevel!(4, "opened {} ({} bytes)\n", path.display(), len);
    Ok(SrcFile { file, len })
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// A buffered, truncating output file.
///
/// Call [`finish`](DstFile::finish) to flush and observe write errors;
/// dropping without it flushes on a best-effort basis only.
pub struct DstFile {
    inner: BufWriter<File>,
    path: PathBuf,
}

impl DstFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes buffered bytes to the file.
    pub fn finish(mut self) -> Result<(), KefkaError> {
        self.inner
            .flush()
            .map_err(|e| KefkaError::io(&self.path, e))
    }
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Creates `path`, truncating any existing file. The parent directory is
/// never created.
pub fn create_dst_file(path: &Path) -> Result<DstFile, KefkaError> {
    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| KefkaError::io(path, e))?;
    Ok(DstFile {
        inner: BufWriter::with_capacity(DST_BUFFER_SIZE, f),
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
