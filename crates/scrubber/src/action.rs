//! Scrub actions and per-field override tags.

use serde::{Deserialize, Serialize};

/// Action to apply to a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Replace with `[redacted:md5:<hex>]` of the full value
    Hash,
    /// Replace with the bare `[redacted]` marker
    Redact,
    /// Leave untouched
    Ignore,
    /// No name-based decision; fall back to content scanning
    Unclassified,
}

impl Action {
    /// Returns whether this action replaces the whole value.
    pub fn is_whole_value(&self) -> bool {
        matches!(self, Action::Hash | Action::Redact)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Hash => "hash",
            Action::Redact => "redact",
            Action::Ignore => "ignore",
            Action::Unclassified => "unclassified",
        };
        write!(f, "{}", s)
    }
}

/// Explicit per-field override supplied by the owner of a record.
///
/// When present it fully determines the action for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Hash,
    Redact,
    Ignore,
}

impl Tag {
    /// Parse a tag from its annotation text.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hash" => Some(Tag::Hash),
            "redact" => Some(Tag::Redact),
            "ignore" => Some(Tag::Ignore),
            _ => None,
        }
    }
}

impl From<Tag> for Action {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Hash => Action::Hash,
            Tag::Redact => Action::Redact,
            Tag::Ignore => Action::Ignore,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Action::from(*self).fmt(f)
    }
}
