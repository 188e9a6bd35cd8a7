//! Fuzz target for content detection over free text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scrubber::Scrubber;

fuzz_target!(|text: &str| {
    let scrubber = Scrubber::global();
    let once = scrubber.scan_text(text);
    let twice = scrubber.scan_text(&once);
    assert_eq!(once, twice);
});
