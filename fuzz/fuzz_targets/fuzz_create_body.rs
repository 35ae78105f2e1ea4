//! Fuzz target: JSON decoding of the create-address body.
//!
//! The create endpoint decodes its body leniently, so arbitrary bytes must
//! never cause panics; decode failures fall back to the default request.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mailbin_core::normalize_name;
use mailbin_gateway::routes::CreateBody;

fuzz_target!(|data: &[u8]| {
    let body: CreateBody = serde_json::from_slice(data).unwrap_or_default();
    // The handler feeds whatever survived decoding into normalization.
    let _ = normalize_name(body.name.as_deref().unwrap_or_default());
});
