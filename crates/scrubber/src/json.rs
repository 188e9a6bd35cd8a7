//! JSON documents.
//!
//! Documents are decoded into [`serde_json::Value`], walked like any other
//! tree and re-encoded compactly with object keys in ascending order, so the
//! same document always scrubs to the same bytes.

use crate::walk::{Context, Scrub, Shape};
use crate::{Result, ScrubError, Scrubber};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Key whose string content names the sibling `"value"` entry.
pub const PAIR_NAME_KEY: &str = "name";

/// Key classified by the sibling `"name"` entry.
pub const PAIR_VALUE_KEY: &str = "value";

impl Scrub for Value {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        match self {
            Value::String(text) => text.scrub(scrubber, ctx),
            Value::Array(items) => items.scrub(scrubber, ctx),
            Value::Object(map) => map.scrub(scrubber, ctx),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    fn shape(&self) -> Shape {
        match self {
            Value::Object(_) | Value::Array(_) => Shape::Composite,
            Value::String(_) => Shape::Text,
            Value::Null | Value::Bool(_) | Value::Number(_) => Shape::Scalar,
        }
    }
}

impl Scrub for Map<String, Value> {
    fn scrub(&mut self, scrubber: &Scrubber, ctx: Context<'_>) {
        let paired = if ctx.tag.is_none() && scrubber.name_value_pairs() {
            paired_name(scrubber, self)
        } else {
            None
        };

        for (key, value) in self.iter_mut() {
            if let Some(name) = paired.as_deref() {
                if key == PAIR_VALUE_KEY {
                    if let Value::String(text) = &mut *value {
                        scrubber.scrub_string(text, scrubber.classify(name, None));
                        continue;
                    }
                }
            }
            scrubber.visit(value, ctx.entry(key));
        }
    }
}

/// The `"name"` content of an object holding a non-empty `"name"` and `"value"` string pair.
///
/// A name that already carries a marker was scrubbed on an earlier pass and no
/// longer says anything about the value.
fn paired_name(scrubber: &Scrubber, map: &Map<String, Value>) -> Option<String> {
    match (map.get(PAIR_NAME_KEY), map.get(PAIR_VALUE_KEY)) {
        (Some(Value::String(name)), Some(Value::String(value)))
            if !name.is_empty() && !value.is_empty() && !scrubber.contains_marker(name) =>
        {
            Some(name.clone())
        }
        _ => None,
    }
}

/// Serializes a value with object keys sorted, whatever map backs `Value`.
struct Canonical<'a>(&'a Value);

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, &Canonical(value))?;
                }
                out.end()
            }
            Value::Array(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    out.serialize_element(&Canonical(item))?;
                }
                out.end()
            }
            other => other.serialize(serializer),
        }
    }
}

/// Compact encoding with sorted object keys.
pub fn to_canonical_vec(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&Canonical(value))?)
}

/// Compact encoding with sorted object keys, as a string.
pub fn to_canonical_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&Canonical(value))?)
}

fn parse_document(input: &[u8]) -> Result<Value> {
    serde_json::from_slice(input).map_err(|e| {
        tracing::debug!(line = e.line(), column = e.column(), "rejecting malformed JSON");
        ScrubError::Parse(e)
    })
}

impl Scrubber {
    /// Redact a JSON value of any shape in place.
    pub fn scrub_value(&self, value: &mut Value) {
        self.visit(value, Context::root());
    }

    /// Decode, redact and re-encode a JSON document.
    ///
    /// Malformed input yields [`ScrubError::Parse`] and no output.
    pub fn scrub_json(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut value = parse_document(input)?;
        self.scrub_value(&mut value);
        to_canonical_vec(&value)
    }

    /// [`Scrubber::scrub_json`] over text.
    pub fn scrub_json_str(&self, input: &str) -> Result<String> {
        let mut value = parse_document(input.as_bytes())?;
        self.scrub_value(&mut value);
        to_canonical_string(&value)
    }
}
