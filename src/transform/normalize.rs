//! Streaming end-of-line normalization.
//!
//! Every CR, LF and CRLF occurrence in the source is rewritten to one
//! target sequence (LF unless asked otherwise). The source is read through
//! a single reusable buffer whose capacity is `min(buffer_cap, src_len)`
//! (never below 2), so memory stays bounded whatever the file size.
//!
//! # Chunk boundaries
//!
//! A CR that is the last byte of a chunk cannot be classified yet: it is
//! either a lone CR or the first half of a CRLF pair whose LF is still
//! unread. When more input remains, that CR is excluded from the scan,
//! moved to `buf[0]`, and the next read starts at offset 1 so the CR is
//! re-examined together with the fresh bytes. On the final chunk there is
//! nothing left to wait for and a trailing CR is a lone CR.
//!
//! The loop state is the tuple `{buf, valid_len, carry_pending}` held in
//! [`ChunkState`]; it lives for exactly one call.

use std::io::{self, Read, Write};

use crate::config::{BUFFER_CAP_DEFAULT, MIN_BUFFER_CAP};
use crate::eol::{EolKind, CARRIAGE_RETURN, LINE_FEED};
use crate::transform::bom::{strip_bom, UTF8_BOM};
use crate::transform::read_full;

// ─────────────────────────────────────────────────────────────────────────────
// Options / results
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for one [`normalize_eol`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Sequence every line ending is rewritten to.
    pub target: EolKind,
    /// Drop a leading UTF-8 BOM.
    pub remove_bom: bool,
    /// Upper bound on the read buffer, in bytes.
    pub buffer_cap: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            target: EolKind::Lf,
            remove_bom: true,
            buffer_cap: BUFFER_CAP_DEFAULT,
        }
    }
}

/// Counters reported by [`normalize_eol`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// CR, LF and CRLF occurrences found (a CRLF pair counts once).
    pub line_endings: u64,
    pub bom_removed: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Scanner
// ─────────────────────────────────────────────────────────────────────────────

/// Rewrites the line endings in `input`, appending the result to `out`.
///
/// `input` must not end in a CR that might pair with an LF outside the
/// slice; [`normalize_eol`] guarantees this by withholding such a CR.
/// Returns the number of line endings rewritten.
pub fn scan_eol(input: &[u8], target: EolKind, out: &mut Vec<u8>) -> u64 {
    let eol = target.as_bytes();
    let mut count = 0u64;
    let mut pos = 0usize;

    while pos < input.len() {
        let run = input[pos..]
            .iter()
            .position(|&b| b == CARRIAGE_RETURN || b == LINE_FEED)
            .unwrap_or(input.len() - pos);
        out.extend_from_slice(&input[pos..pos + run]);
        pos += run;
        if pos == input.len() {
            break;
        }

        if input[pos] == CARRIAGE_RETURN && input.get(pos + 1) == Some(&LINE_FEED) {
            pos += 2;
        } else {
            pos += 1;
        }
        out.extend_from_slice(eol);
        count += 1;
    }

    count
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming driver
// ─────────────────────────────────────────────────────────────────────────────

struct ChunkState {
    buf: Vec<u8>,
    valid_len: usize,
    carry_pending: bool,
}

/// Buffer capacity for a source of `src_len` bytes.
///
/// With BOM removal enabled the floor is the BOM length so the whole mark
/// always lands in the first chunk.
fn buffer_capacity(opts: &NormalizeOptions, src_len: u64) -> usize {
    let floor = if opts.remove_bom {
        UTF8_BOM.len()
    } else {
        MIN_BUFFER_CAP
    };
    let cap = opts.buffer_cap.max(MIN_BUFFER_CAP) as u64;
    (cap.min(src_len) as usize).max(floor)
}

/// Streams `src_len` bytes from `src` to `dst`, rewriting line endings.
///
/// If `src` ends before `src_len` bytes were delivered, the stream is
/// treated as ending there. Output is written chunk by chunk; nothing is
/// flushed here.
pub fn normalize_eol<R, W>(
    src: &mut R,
    src_len: u64,
    dst: &mut W,
    opts: &NormalizeOptions,
) -> io::Result<NormalizeStats>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut stats = NormalizeStats::default();
    if src_len == 0 {
        return Ok(stats);
    }

    let cap = buffer_capacity(opts, src_len);
    let mut state = ChunkState {
        buf: vec![0u8; cap],
        valid_len: 0,
        carry_pending: false,
    };
    let mut out = Vec::with_capacity(cap * opts.target.as_bytes().len());
    let mut remaining = src_len;
    let mut first_chunk = true;

    crate::displaylevel!(4, "normalize: {} bytes, buffer {} bytes, target {}\n", src_len, cap, opts.target);

    while remaining > 0 {
        let offset = usize::from(state.carry_pending);
        let want = remaining.min((cap - offset) as u64) as usize;
        let n = read_full(src, &mut state.buf[offset..offset + want])?;
        stats.bytes_read += n as u64;
        remaining = if n < want { 0 } else { remaining - n as u64 };
        state.valid_len = offset + n;

        if first_chunk {
            first_chunk = false;
            if opts.remove_bom {
                let before = state.valid_len;
                state.valid_len = strip_bom(&mut state.buf, before);
                stats.bom_removed = state.valid_len != before;
                if stats.bom_removed {
                    crate::displaylevel!(4, "normalize: byte-order-mark removed\n");
                }
            }
        }

        let chunk = &state.buf[..state.valid_len];
        let carry_next = remaining > 0 && chunk.last() == Some(&CARRIAGE_RETURN);
        let safe_end = if carry_next { chunk.len() - 1 } else { chunk.len() };

        out.clear();
        stats.line_endings += scan_eol(&chunk[..safe_end], opts.target, &mut out);
        if !out.is_empty() {
            dst.write_all(&out)?;
            stats.bytes_written += out.len() as u64;
        }

        if carry_next {
            state.buf[0] = CARRIAGE_RETURN;
        }
        state.carry_pending = carry_next;
    }

    Ok(stats)
}

/// In-memory convenience wrapper around [`normalize_eol`].
pub fn normalize_to_vec(input: &[u8], opts: &NormalizeOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut src = input;
    // Reading from a slice and writing to a Vec cannot fail.
    if normalize_eol(&mut src, input.len() as u64, &mut out, opts).is_err() {
        out.clear();
    }
    out
}
