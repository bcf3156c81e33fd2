//! UTF-8 byte-order-mark handling.
//!
//! Detection is one-shot: only the first chunk of a stream is ever checked.

/// The UTF-8 encoding of U+FEFF.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Returns `true` if `chunk` starts with the UTF-8 BOM.
#[inline]
pub fn has_bom(chunk: &[u8]) -> bool {
    chunk.starts_with(&UTF8_BOM)
}

/// Removes a leading BOM from `buf[..valid]`, shifting the remaining bytes
/// to the start of the buffer.
///
/// Returns the new valid length: `valid - 3` when a BOM was stripped,
/// `valid` otherwise. A chunk that consisted of nothing but the BOM comes
/// back with length 0.
pub fn strip_bom(buf: &mut [u8], valid: usize) -> usize {
    if !has_bom(&buf[..valid]) {
        return valid;
    }
    buf.copy_within(UTF8_BOM.len()..valid, 0);
    valid - UTF8_BOM.len()
}
