#![no_main]
use libfuzzer_sys::fuzz_target;

use kefka::transform::{normalize_to_vec, NormalizeOptions};
use kefka::EolKind;

fuzz_target!(|data: &[u8]| {
    // First byte picks the options, the rest is the file body.
    let Some((&selector, body)) = data.split_first() else {
        return;
    };
    let target = match selector % 3 {
        0 => EolKind::Lf,
        1 => EolKind::Crlf,
        _ => EolKind::Cr,
    };
    let remove_bom = selector & 0x80 != 0;
    let small_cap = 2 + (selector as usize >> 2) % 16;

    let whole = normalize_to_vec(body, &NormalizeOptions { target, remove_bom, buffer_cap: 1 << 20 });
    let chunked = normalize_to_vec(body, &NormalizeOptions { target, remove_bom, buffer_cap: small_cap });
    assert_eq!(whole, chunked, "output changed with a {}-byte buffer", small_cap);

    // Normalized output is a fixed point.
    let again = normalize_to_vec(&whole, &NormalizeOptions { target, remove_bom: false, buffer_cap: small_cap });
    assert_eq!(whole, again, "normalizing twice changed the output");

    if target == EolKind::Lf {
        assert!(!whole.contains(&b'\r'));
    }
});
