//! Fuzz target: address name normalization.
//!
//! Verifies that `normalize_name` never panics on arbitrary input and
//! always upholds its output invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mailbin_core::{normalize_name, MAX_NAME_CHARS};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let name = normalize_name(raw);
    assert!(!name.is_empty(), "normalized name must never be empty");
    assert!(
        name.chars().count() <= MAX_NAME_CHARS,
        "normalized name must fit the length cap"
    );
    assert!(
        !name.chars().any(char::is_whitespace),
        "normalized name must contain no whitespace"
    );
});
