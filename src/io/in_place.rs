//! In-place rewriting through a temporary file.
//!
//! The transformed bytes are staged in a uniquely named file inside the
//! temp directory, then copied in full back over the original, then the
//! staging file is removed. Removal is best-effort: a failure is reported
//! at display level 2 and otherwise ignored. If anything fails before the
//! copy-back starts the original is left untouched; the staging file is
//! removed when it drops on every exit path.
//!
//! This is not crash-safe: an interruption during copy-back leaves the
//! original truncated.

use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::TEMP_FILE_PREFIX;
use crate::error::KefkaError;
use crate::io::file_io::{create_dst_file, open_src_file, SrcFile};
use crate::io::prefs::Prefs;
use crate::transform::copy_stream;
use crate::util::get_open_file_size;

/// Rewrites `path` with the output of `transform`.
///
/// `transform` receives the opened source and a writer into the staging
/// file; its I/O errors are attributed to `path`. Returns whatever
/// `transform` returned.
pub fn rewrite_in_place<T, F>(path: &Path, prefs: &Prefs, transform: F) -> Result<T, KefkaError>
where
    F: FnOnce(&mut SrcFile, &mut dyn Write) -> io::Result<T>,
{
    let temp_dir = prefs.temp_dir();
    let mut staging = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(".tmp")
        .tempfile_in(&temp_dir)
        .map_err(|e| KefkaError::io(&temp_dir, e))?;
    crate::displaylevel!(4, "in-place: staging {} as {}\n", path.display(), staging.path().display());

    let value = {
        let mut src = open_src_file(path)?;
        let mut writer = BufWriter::new(staging.as_file_mut());
        let value = transform(&mut src, &mut writer).map_err(|e| KefkaError::io(path, e))?;
        writer.flush().map_err(|e| KefkaError::io(path, e))?;
        value
    };

    copy_back(&mut staging, path, prefs.buffer_cap)?;
    remove_staging(staging);
    Ok(value)
}

/// Copies the whole staging file over `dest`.
fn copy_back(staging: &mut NamedTempFile, dest: &Path, buffer_cap: usize) -> Result<u64, KefkaError> {
    let staging_path = staging.path().to_path_buf();
    let file: &mut File = staging.as_file_mut();
    file.seek(SeekFrom::Start(0))
        .map_err(|e| KefkaError::io(&staging_path, e))?;
    let len = get_open_file_size(file);

    let mut dst = create_dst_file(dest)?;
    let mut buf = vec![0u8; (buffer_cap as u64).min(len).max(1) as usize];
    let copied = copy_stream(file, len, &mut dst, &mut buf).map_err(|e| KefkaError::io(dest, e))?;
    dst.finish()?;
    crate::displaylevel!(4, "in-place: copied {} bytes back to {}\n", copied, dest.display());
    Ok(copied)
}

fn remove_staging(staging: NamedTempFile) {
    let path = staging.path().to_path_buf();
    if let Err(e) = staging.close() {
        crate::displaylevel!(
            2,
            "warning: could not remove temporary file {}: {}\n",
            path.display(),
            e
        );
    }
}
