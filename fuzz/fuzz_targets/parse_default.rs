//! Fuzz target for default-value parsing.
//!
//! The first byte picks a `Kind`, the rest is the annotation text. Parsing
//! must never panic, and a produced value must have the requested kind.
//!
//! Run with: `cargo +nightly fuzz run parse_default`

#![no_main]
use libfuzzer_sys::fuzz_target;
use preset::Kind;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let kind = Kind::ALL[usize::from(selector) % Kind::ALL.len()];

    if let Ok(text) = std::str::from_utf8(rest) {
        if let Some(value) = preset::parse(kind, text) {
            assert_eq!(value.kind(), kind);
        }
    }
});
