//! Fuzz target: JSON decoding of the push body.
//!
//! Errors are expected for malformed input; panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mailbin_gateway::routes::PushBody;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<PushBody>(data);
});
