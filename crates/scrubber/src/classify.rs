//! Name-based classification of fields and map keys.

use crate::error::{Result, ScrubError};
use crate::{Action, Tag};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Maps a field or key name to an [`Action`].
///
/// Hashed names are an exact set compared after [`normalize_name`];
/// redacted names are case-insensitive patterns searched anywhere in the name.
#[derive(Debug, Clone)]
pub struct NameClassifier {
    hashed: HashSet<String>,
    redacted: Vec<Regex>,
}

/// Lowercase and drop `_` and `-`, so `workspace_id`, `WorkspaceID` and
/// `workspace-id` compare equal.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl NameClassifier {
    /// Build a classifier.
    ///
    /// `redacted_fragments` are literal substrings joined into one
    /// alternation; `redacted_patterns` are raw regexes.
    pub fn new<S: AsRef<str>>(
        hashed_names: &[S],
        redacted_fragments: &[S],
        redacted_patterns: &[S],
    ) -> Result<Self> {
        let hashed: HashSet<String> = hashed_names
            .iter()
            .map(|n| normalize_name(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();

        let mut redacted = Vec::new();

        let fragments: Vec<String> = redacted_fragments
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| !f.is_empty())
            .map(regex::escape)
            .collect();
        if !fragments.is_empty() {
            redacted.push(compile("redacted_field_names", &fragments.join("|"))?);
        }

        for pattern in redacted_patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(ScrubError::Policy(
                    "empty redacted field pattern".to_string(),
                ));
            }
            redacted.push(compile(pattern, pattern)?);
        }

        Ok(Self { hashed, redacted })
    }

    /// Classify `name`, honouring an explicit override first.
    pub fn classify(&self, name: &str, tag: Option<Tag>) -> Action {
        if let Some(tag) = tag {
            return tag.into();
        }
        if self.is_hashed(name) {
            return Action::Hash;
        }
        if self.is_redacted(name) {
            return Action::Redact;
        }
        Action::Unclassified
    }

    /// Whether `name` is in the hashed-names set.
    pub fn is_hashed(&self, name: &str) -> bool {
        !self.hashed.is_empty() && self.hashed.contains(&normalize_name(name))
    }

    /// Whether `name` matches any redacted-names pattern.
    pub fn is_redacted(&self, name: &str) -> bool {
        self.redacted.iter().any(|re| re.is_match(name))
    }

    /// Number of hashed names.
    pub fn hashed_len(&self) -> usize {
        self.hashed.len()
    }

    /// Number of compiled redacted-name patterns.
    pub fn redacted_len(&self) -> usize {
        self.redacted.len()
    }
}

fn compile(rule: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ScrubError::Pattern {
            name: rule.to_string(),
            source,
        })
}
