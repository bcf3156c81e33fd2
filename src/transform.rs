//! Byte-level streaming transforms.
//!
//! These functions work on any `Read` / `Write` pair and know nothing about
//! paths; the file-level orchestration in [`crate::io`] opens the streams,
//! resolves output targets and turns I/O faults into
//! [`crate::error::KefkaError`] values.
//!
//! - [`bom`]       — UTF-8 byte-order-mark detection at stream start.
//! - [`normalize`] — CR / LF / CRLF rewriting through a bounded buffer.
//! - [`splice`]    — delimiter emission and stream concatenation.

pub mod bom;
pub mod normalize;
pub mod splice;

pub use bom::{has_bom, strip_bom, UTF8_BOM};
pub use normalize::{normalize_eol, normalize_to_vec, scan_eol, NormalizeOptions, NormalizeStats};
pub use splice::{
    copy_stream, splice_streams, write_eol_repeated, SpliceSpec, SpliceStats, Splicer,
};

use std::io::{self, Read};

/// Reads from `src` until `buf` is full or the stream reports end-of-file.
///
/// Returns the number of bytes placed in `buf`. Interrupted reads are
/// retried; a short count means end-of-stream.
pub(crate) fn read_full<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
