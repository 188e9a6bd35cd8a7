//! Fuzz target for key/value classification.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrubber::{Action, Scrubber, REDACTED};

#[derive(Debug, Arbitrary)]
struct Pair<'a> {
    key: &'a str,
    value: &'a str,
}

fuzz_target!(|pair: Pair<'_>| {
    let scrubber = Scrubber::global();
    let out = scrubber.classify_keyed(pair.key, pair.value);
    match scrubber.classify(pair.key, None) {
        Action::Redact => assert_eq!(out, REDACTED),
        Action::Hash => assert!(scrubber.is_marker(&out)),
        Action::Ignore | Action::Unclassified => {}
    }
});
