//! Fuzz target for JSON document scrubbing.
//!
//! Arbitrary bytes must either be rejected with an error or produce output
//! that is valid JSON and unchanged by a second pass.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrubber::Scrubber;

fuzz_target!(|data: &[u8]| {
    let scrubber = Scrubber::global();
    if let Ok(once) = scrubber.scrub_json(data) {
        assert!(serde_json::from_slice::<serde_json::Value>(&once).is_ok());
        let twice = scrubber
            .scrub_json(&once)
            .expect("scrubbed output must parse");
        assert_eq!(once, twice);
    }
});
