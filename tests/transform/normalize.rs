// Integration tests for src/transform/normalize.rs — streaming EOL rewriting.
//
// Covers:
//   - every CR, LF and CRLF becomes exactly one target sequence
//   - output is independent of the buffer capacity (CR split across chunks)
//   - idempotence and line-ending counts over generated inputs
//   - BOM handling on and off
//   - sources that deliver fewer bytes than declared

use std::io::{self, Read};

use kefka::transform::{normalize_eol, normalize_to_vec, scan_eol, NormalizeOptions, UTF8_BOM};
use kefka::EolKind;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn opts(target: EolKind, remove_bom: bool, buffer_cap: usize) -> NormalizeOptions {
    NormalizeOptions {
        target,
        remove_bom,
        buffer_cap,
    }
}

fn lf(input: &[u8]) -> Vec<u8> {
    normalize_to_vec(input, &NormalizeOptions::default())
}

/// Deterministic byte soup weighted towards CR and LF.
fn generated(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            match (state >> 33) % 6 {
                0 => b'\r',
                1 => b'\n',
                2 => 0xEF,
                _ => b'a' + ((state >> 40) % 26) as u8,
            }
        })
        .collect()
}

/// Counts line endings the way a reader would: CRLF once, lone CR or LF once.
fn count_line_endings(data: &[u8]) -> usize {
    let mut n = 0;
    let mut i = 0;
    while i < data.len() {
        match data[i] {
            b'\r' if data.get(i + 1) == Some(&b'\n') => {
                n += 1;
                i += 2;
                continue;
            }
            b'\r' | b'\n' => n += 1,
            _ => {}
        }
        i += 1;
    }
    n
}

/// Reader that hands out at most `step` bytes per call.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed inputs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mixed_endings_to_lf() {
    assert_eq!(lf(b"a\r\nb\rc\nd"), b"a\nb\nc\nd");
}

#[test]
fn mixed_endings_to_crlf_and_cr() {
    let input = b"a\r\nb\rc\nd";
    assert_eq!(
        normalize_to_vec(input, &opts(EolKind::Crlf, true, 64)),
        b"a\r\nb\r\nc\r\nd"
    );
    assert_eq!(normalize_to_vec(input, &opts(EolKind::Cr, true, 64)), b"a\rb\rc\rd");
}

#[test]
fn runs_of_terminators() {
    assert_eq!(lf(b"\r\r\n\n\r"), b"\n\n\n\n");
    assert_eq!(lf(b"\n\r"), b"\n\n");
}

#[test]
fn empty_input_writes_nothing() {
    let mut out = Vec::new();
    let mut src: &[u8] = b"";
    let stats = normalize_eol(&mut src, 0, &mut out, &NormalizeOptions::default()).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.bytes_read, 0);
    assert_eq!(stats.bytes_written, 0);
}

#[test]
fn eight_bytes_with_cr_on_chunk_boundary() {
    // With a 4-byte buffer the first chunk ends in the CR of a CRLF.
    let input = b"abc\r\ndef";
    let mut out = Vec::new();
    let mut src: &[u8] = input;
    let stats = normalize_eol(&mut src, 8, &mut out, &opts(EolKind::Lf, false, 4)).unwrap();
    assert_eq!(out, b"abc\ndef");
    assert_eq!(stats.bytes_read, 8);
    assert_eq!(stats.bytes_written, 7);
    assert_eq!(stats.line_endings, 1);
}

#[test]
fn trailing_cr_at_end_of_stream_is_lone() {
    for cap in 2..=6 {
        assert_eq!(
            normalize_to_vec(b"abc\r", &opts(EolKind::Lf, false, cap)),
            b"abc\n",
            "cap {cap}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties over generated inputs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn lf_output_has_no_cr_and_same_line_count() {
    for seed in 0..32 {
        let input = generated(seed, 300);
        let out = lf(&input);
        assert!(!out.contains(&b'\r'), "seed {seed}");
        let lfs = out.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(lfs, count_line_endings(&input), "seed {seed}");
    }
}

#[test]
fn normalization_is_idempotent() {
    for target in [EolKind::Lf, EolKind::Crlf, EolKind::Cr] {
        for seed in 0..16 {
            let o = opts(target, false, 64);
            let once = normalize_to_vec(&generated(seed, 257), &o);
            let twice = normalize_to_vec(&once, &o);
            assert_eq!(once, twice, "{target} seed {seed}");
        }
    }
}

#[test]
fn output_does_not_depend_on_buffer_capacity() {
    for target in [EolKind::Lf, EolKind::Crlf, EolKind::Cr] {
        for remove_bom in [false, true] {
            for seed in 0..8 {
                let mut input = UTF8_BOM.to_vec();
                input.extend(generated(seed, 90));
                let reference = normalize_to_vec(&input, &opts(target, remove_bom, 1 << 16));
                for cap in 2..=input.len() + 1 {
                    let out = normalize_to_vec(&input, &opts(target, remove_bom, cap));
                    assert_eq!(out, reference, "{target} bom {remove_bom} seed {seed} cap {cap}");
                }
            }
        }
    }
}

#[test]
fn streaming_matches_whole_buffer_scan() {
    for seed in 0..8 {
        let input = generated(seed, 500);
        let mut expected = Vec::new();
        scan_eol(&input, EolKind::Crlf, &mut expected);
        assert_eq!(normalize_to_vec(&input, &opts(EolKind::Crlf, false, 7)), expected);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Byte order mark
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bom_removed_when_requested() {
    let mut input = UTF8_BOM.to_vec();
    input.extend_from_slice(b"x\r\n");
    let mut out = Vec::new();
    let mut src: &[u8] = &input;
    let stats = normalize_eol(&mut src, input.len() as u64, &mut out, &NormalizeOptions::default()).unwrap();
    assert_eq!(out, b"x\n");
    assert!(stats.bom_removed);
}

#[test]
fn bom_kept_when_not_requested() {
    let mut input = UTF8_BOM.to_vec();
    input.extend_from_slice(b"x\r\n");
    let out = normalize_to_vec(&input, &opts(EolKind::Lf, false, 64));
    assert_eq!(&out[..3], &UTF8_BOM);
    assert_eq!(&out[3..], b"x\n");
}

#[test]
fn bom_only_recognised_at_start() {
    let mut input = b"x".to_vec();
    input.extend_from_slice(&UTF8_BOM);
    assert_eq!(lf(&input), input);
}

#[test]
fn partial_bom_is_data() {
    assert_eq!(lf(&[0xEF, 0xBB, b'\r']), vec![0xEF, 0xBB, b'\n']);
}

// ─────────────────────────────────────────────────────────────────────────────
// Source behaviour
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn short_reads_are_reassembled() {
    let input = b"one\r\ntwo\rthree\n";
    for step in 1..=4 {
        let mut out = Vec::new();
        let mut src = Trickle { data: input, step };
        normalize_eol(&mut src, input.len() as u64, &mut out, &opts(EolKind::Lf, true, 5)).unwrap();
        assert_eq!(out, b"one\ntwo\nthree\n", "step {step}");
    }
}

#[test]
fn source_shorter_than_declared_ends_early() {
    let input = b"ab\r";
    let mut out = Vec::new();
    let mut src: &[u8] = input;
    let stats = normalize_eol(&mut src, 100, &mut out, &opts(EolKind::Lf, false, 3)).unwrap();
    assert_eq!(out, b"ab\n");
    assert_eq!(stats.bytes_read, 3);
}
