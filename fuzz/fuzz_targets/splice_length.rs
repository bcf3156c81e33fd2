#![no_main]
use libfuzzer_sys::fuzz_target;

use kefka::transform::{splice_streams, SpliceSpec};
use kefka::EolKind;

fuzz_target!(|data: &[u8]| {
    // Split the input on 0xFF into parts; the first byte picks the repeat count.
    let Some((&repeat, rest)) = data.split_first() else {
        return;
    };
    let parts: Vec<&[u8]> = rest.split(|&b| b == 0xFF).collect();
    let spec = SpliceSpec {
        delimiter: Some(EolKind::Crlf),
        delimiter_repeat: (repeat % 4) as usize,
        terminator: Some(EolKind::Cr),
        buffer_cap: 3,
    };

    let mut out = Vec::new();
    let stats = splice_streams(parts.iter().map(|p| (*p, p.len() as u64)), &mut out, &spec).unwrap();

    let content: usize = parts.iter().map(|p| p.len()).sum();
    let expected = content + parts.len() * 2 * spec.delimiter_repeat + 1;
    assert_eq!(out.len(), expected);
    assert_eq!(stats.bytes_written(), out.len() as u64);
});
