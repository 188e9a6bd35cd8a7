//! Fuzz target for policy parsing and compilation.
//!
//! Any policy that parses must either compile or return an error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrubber::{ScrubPolicy, Scrubber};

fuzz_target!(|data: &[u8]| {
    if let Ok(policy) = serde_json::from_slice::<ScrubPolicy>(data) {
        let _ = Scrubber::new(&policy);
    }
});
