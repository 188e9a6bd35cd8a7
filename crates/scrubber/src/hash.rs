//! Digests and redaction markers.
//!
//! Hashed values are rendered as `[redacted:md5:<hex>]`. MD5 is used as a
//! stable, fixed-width fingerprint so the same identifier correlates across
//! log lines; it is not a secrecy boundary for low-entropy inputs.

use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker for values redacted by name.
pub const REDACTED: &str = "[redacted]";

/// Number of hex characters in a digest.
pub const DIGEST_HEX_LEN: usize = 32;

const MARKER_BODY: &str = r"\[redacted(?::md5:[0-9a-f]{32}|:[A-Za-z0-9_.-]+)?\]";

static RE_MARKER_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}$", MARKER_BODY)).unwrap());

static RE_MARKER_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(MARKER_BODY).unwrap());

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap());

/// Lowercase hex MD5 digest of the input.
pub fn digest_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// `[redacted:md5:<hex>]` for the given input.
pub fn hash_marker(input: &str) -> String {
    format!("[redacted:md5:{}]", digest_hex(input))
}

/// `[redacted:<tag>]` for a literal detector.
pub fn literal_marker(tag: &str) -> String {
    format!("[redacted:{}]", tag)
}

/// Whether the whole value has the shape of a marker.
///
/// This checks syntax only. Whether a `[redacted:<tag>]` marker names a
/// detector is up to the registry, see `DetectorRegistry::is_marker`.
pub fn is_marker(value: &str) -> bool {
    value.starts_with("[redacted") && RE_MARKER_EXACT.is_match(value)
}

/// The tag of a `[redacted:<tag>]` marker.
///
/// `None` for `[redacted]` and digest markers.
pub fn marker_tag(marker: &str) -> Option<&str> {
    let tag = marker.strip_prefix("[redacted:")?.strip_suffix(']')?;
    if tag.starts_with("md5:") {
        None
    } else {
        Some(tag)
    }
}

/// Byte ranges of marker-shaped spans in `text`.
pub fn marker_spans(text: &str) -> Vec<(usize, usize)> {
    if !text.contains("[redacted") {
        return Vec::new();
    }
    RE_MARKER_SPAN
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// Whether `tag` can be embedded in a literal marker.
pub fn is_valid_tag(tag: &str) -> bool {
    RE_TAG.is_match(tag)
}
