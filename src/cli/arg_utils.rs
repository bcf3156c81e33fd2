// arg_utils.rs — Small parsing helpers shared by the argument loop and the
// environment-variable readers in config.rs.

/// Parses an unsigned 32-bit integer from the start of `s`, optionally
/// followed by a size suffix. Returns `None` if `s` has no leading digit,
/// otherwise `Some((value, remainder))` where `remainder` is whatever was
/// not consumed.
///
/// Recognised suffixes (case-sensitive):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
///
/// Values that overflow saturate at `u32::MAX`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut result: u32 = s[..digits].bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });

    let mut rest = &s[digits..];
    let shift = match rest.as_bytes().first() {
        Some(b'K') => Some(10),
        Some(b'M') => Some(20),
        _ => None,
    };
    if let Some(shift) = shift {
        result = result.checked_mul(1 << shift).unwrap_or(u32::MAX);
        rest = &rest[1..];
        rest = rest.strip_prefix('i').unwrap_or(rest);
        rest = rest.strip_prefix('B').unwrap_or(rest);
    }

    Some((result, rest))
}

/// Parses a plain decimal count that must span the whole of `s`.
///
/// Used for `-dn=` where a suffix or trailing text is a usage error.
pub fn read_count(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// If `arg` starts with `prefix`, returns the remainder of `arg` after it.
///
/// `option_value("-d=crlf", "-d=")` yields `Some("crlf")`.
pub fn option_value<'a>(arg: &'a str, prefix: &str) -> Option<&'a str> {
    arg.strip_prefix(prefix)
}
