//! Fuzz target for field type classification.
//!
//! Any text that syn accepts as a type must classify without panicking.
//!
//! Run with: `cargo +nightly fuzz run classify_type`

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ty) = syn::parse_str::<syn::Type>(s) {
            let _ = preset_macros_support::classify(&ty);
        }
    }
});
