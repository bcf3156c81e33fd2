//! Delimited concatenation of byte streams.
//!
//! Inputs are copied verbatim, in order, into one destination. After every
//! input (the last one included) the delimiter is written `delimiter_repeat`
//! times; once all inputs are in, the terminator is written exactly once.
//! No content is transformed.

use std::io::{self, Read, Write};

use crate::config::{BUFFER_CAP_DEFAULT, DELIMITER_REPEAT_DEFAULT};
use crate::eol::EolKind;

/// Writes `kind` to `dst` `count` times. Returns the number of bytes written.
pub fn write_eol_repeated<W: Write + ?Sized>(
    dst: &mut W,
    kind: EolKind,
    count: usize,
) -> io::Result<u64> {
    let eol = kind.as_bytes();
    for _ in 0..count {
        dst.write_all(eol)?;
    }
    Ok((eol.len() * count) as u64)
}

/// Copies up to `src_len` bytes from `src` to `dst` through `buf`.
///
/// Stops early if `src` ends first. Returns the number of bytes copied.
pub fn copy_stream<R, W>(src: &mut R, src_len: u64, dst: &mut W, buf: &mut [u8]) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    debug_assert!(!buf.is_empty());
    let mut remaining = src_len;
    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let n = match src.read(&mut buf[..want]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        dst.write_all(&buf[..n])?;
        remaining -= n as u64;
    }
    Ok(src_len - remaining)
}

/// How inputs are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceSpec {
    /// Written after every input; `None` writes nothing.
    pub delimiter: Option<EolKind>,
    pub delimiter_repeat: usize,
    /// Written once at the very end; `None` writes nothing.
    pub terminator: Option<EolKind>,
    pub buffer_cap: usize,
}

impl Default for SpliceSpec {
    fn default() -> Self {
        Self {
            delimiter: None,
            delimiter_repeat: DELIMITER_REPEAT_DEFAULT,
            terminator: None,
            buffer_cap: BUFFER_CAP_DEFAULT,
        }
    }
}

/// Totals reported once splicing is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpliceStats {
    pub inputs: usize,
    pub bytes_copied: u64,
    pub delimiter_bytes: u64,
    pub terminator_bytes: u64,
}

impl SpliceStats {
    pub fn bytes_written(&self) -> u64 {
        self.bytes_copied + self.delimiter_bytes + self.terminator_bytes
    }
}

/// Incremental splicer: call [`append`](Splicer::append) per input, then
/// [`finish`](Splicer::finish).
///
/// The copy buffer is sized `min(buffer_cap, input length)` for each input
/// and reused across inputs.
pub struct Splicer<'a, W: Write + ?Sized> {
    dst: &'a mut W,
    spec: SpliceSpec,
    buf: Vec<u8>,
    stats: SpliceStats,
}

impl<'a, W: Write + ?Sized> Splicer<'a, W> {
    pub fn new(dst: &'a mut W, spec: SpliceSpec) -> Self {
        Self {
            dst,
            spec,
            buf: Vec::new(),
            stats: SpliceStats::default(),
        }
    }

    /// Copies one input followed by its delimiter run.
    ///
    /// Returns `(bytes_copied, delimiter_bytes)` for this input.
    pub fn append<R: Read + ?Sized>(&mut self, src: &mut R, src_len: u64) -> io::Result<(u64, u64)> {
        let size = (self.spec.buffer_cap as u64).min(src_len).max(1) as usize;
        if self.buf.len() < size {
            self.buf.resize(size, 0);
        }
        let copied = copy_stream(src, src_len, &mut *self.dst, &mut self.buf[..size])?;

        let delim = match self.spec.delimiter {
            Some(kind) => write_eol_repeated(&mut *self.dst, kind, self.spec.delimiter_repeat)?,
            None => 0,
        };

        self.stats.inputs += 1;
        self.stats.bytes_copied += copied;
        self.stats.delimiter_bytes += delim;
        Ok((copied, delim))
    }

    /// Writes the terminator and flushes the destination.
    pub fn finish(mut self) -> io::Result<SpliceStats> {
        if let Some(kind) = self.spec.terminator {
            self.stats.terminator_bytes = write_eol_repeated(&mut *self.dst, kind, 1)?;
        }
        self.dst.flush()?;
        Ok(self.stats)
    }
}

/// Splices every `(reader, length)` pair from `sources` into `dst`.
pub fn splice_streams<I, R, W>(sources: I, dst: &mut W, spec: &SpliceSpec) -> io::Result<SpliceStats>
where
    I: IntoIterator<Item = (R, u64)>,
    R: Read,
    W: Write + ?Sized,
{
    let mut splicer = Splicer::new(dst, *spec);
    for (mut src, len) in sources {
        splicer.append(&mut src, len)?;
    }
    splicer.finish()
}
