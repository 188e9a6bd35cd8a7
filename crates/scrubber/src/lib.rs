//! Redaction engine for structured and unstructured data.
//!
//! This crate removes personally identifying and secret values from records,
//! maps, sequences, JSON documents and free text before they reach logs,
//! analytics or support bundles.
//!
//! # Key Features
//!
//! - **Name-based rules**: values under sensitive field names are replaced by
//!   `[redacted]` or by a `[redacted:md5:<hex>]` digest that keeps them
//!   correlatable.
//! - **Content detectors**: emails, workspace IDs, cloud keys and tokens are
//!   found inside unstructured text and replaced in place.
//! - **Field overrides**: record fields can force hashing, redaction or
//!   pass-through for their whole subtree.
//! - **Idempotent**: scrubbing already scrubbed data changes nothing.
//! - **Fail-closed**: malformed input is rejected without emitting any of it.
//!
//! # Example
//!
//! ```
//! use scrubber::Scrubber;
//!
//! let scrubber = Scrubber::global();
//! assert_eq!(scrubber.classify_keyed("password", "hunter2"), "[redacted]");
//! assert_eq!(scrubber.scan_text("mail foo@bar.com"), "mail [redacted:email]");
//!
//! let out = scrubber
//!     .scrub_json_str(r#"{"userId": "foo", "note": "hi"}"#)
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     r#"{"note":"hi","userId":"[redacted:md5:acbd18db4cc2f85cedef654fccc4a4d8]"}"#
//! );
//! ```

pub mod action;
pub mod classify;
pub mod detect;
pub mod engine;
pub mod error;
pub mod hash;
pub mod json;
pub mod policy;
pub mod resolve;
pub mod walk;

pub use action::{Action, Tag};
pub use classify::{normalize_name, NameClassifier};
pub use detect::{Detection, Detector, DetectorRegistry, Strategy};
pub use engine::Scrubber;
pub use error::{Result, ScrubError};
pub use hash::{digest_hex, hash_marker, is_marker, REDACTED};
pub use json::{to_canonical_string, to_canonical_vec};
pub use policy::{DetectorKind, DetectorRule, ScrubPolicy, POLICY_SCHEMA_VERSION};
pub use resolve::{load_policy, resolve_policy, PolicySource, ResolvedPolicy};
pub use walk::{Context, Fields, Record, Scrub, Shape, Trusted};
