//! Scrub policy configuration.
//!
//! Describes the rule tables a [`crate::Scrubber`] is built from: hashed field
//! names, redacted field names and the content detectors. The default policy
//! carries the built-in tables.

use crate::detect::{Detector, DetectorRegistry, Strategy};
use crate::error::Result;
use crate::NameClassifier;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Schema version for the policy file.
pub const POLICY_SCHEMA_VERSION: &str = "1.0.0";

/// Field names whose values are replaced by their digest.
///
/// Names are compared after [`crate::normalize_name`]: case-insensitive and
/// ignoring `_` and `-`. So `user_id`, `USER-ID` and `userId` all match
/// `userID`, which is wider than a case-insensitive exact match.
pub const HASHED_FIELD_NAMES: &[&str] = &[
    "metaID",
    "workspaceID",
    "workspaceInstanceID",
    "instanceID",
    "userID",
    "username",
];

/// Name fragments whose values are replaced by `[redacted]`.
pub const REDACTED_FIELD_NAMES: &[&str] = &[
    "auth_", "password", "token", "key", "jwt", "secret", "email",
];

/// Scrub policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubPolicy {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Exact field names to hash (case, `_` and `-` insensitive).
    #[serde(default = "default_hashed_field_names")]
    pub hashed_field_names: Vec<String>,

    /// Substrings of field names to redact (case-insensitive).
    #[serde(default = "default_redacted_field_names")]
    pub redacted_field_names: Vec<String>,

    /// Additional regexes over field names to redact (case-insensitive).
    #[serde(default)]
    pub redacted_field_patterns: Vec<String>,

    /// Content detectors, applied in order.
    #[serde(default = "default_detectors")]
    pub detectors: Vec<DetectorRule>,

    /// Classify a JSON object's `"value"` by the content of its `"name"`.
    #[serde(default = "default_true")]
    pub name_value_pairs: bool,
}

fn default_schema_version() -> String {
    POLICY_SCHEMA_VERSION.to_string()
}

fn default_hashed_field_names() -> Vec<String> {
    HASHED_FIELD_NAMES.iter().map(|s| s.to_string()).collect()
}

fn default_redacted_field_names() -> Vec<String> {
    REDACTED_FIELD_NAMES.iter().map(|s| s.to_string()).collect()
}

fn default_detectors() -> Vec<DetectorRule> {
    vec![
        DetectorRule::literal("email", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
        DetectorRule::hash(
            "workspaceID",
            r"\b[a-z][0-9a-z]{1,15}-[0-9a-z]{2,16}-[0-9a-z]{8,11}\b",
        ),
        DetectorRule::literal("aws_access_key", r"AKIA[0-9A-Z]{16}"),
        DetectorRule::literal("github_token", r"gh[pousr]_[A-Za-z0-9_]{36,}"),
        DetectorRule::literal("gitlab_token", r"glpat-[A-Za-z0-9\-_]{20,}"),
        DetectorRule::literal("slack_token", r"xox[baprs]-[A-Za-z0-9\-]+"),
        DetectorRule::literal(
            "jwt",
            r"eyJ[A-Za-z0-9_-]+\.eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+",
        ),
        DetectorRule::literal("private_key", r"-----BEGIN[A-Z ]*PRIVATE KEY-----"),
    ]
}

fn default_true() -> bool {
    true
}

/// Replacement kind for a detector rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Emit `[redacted:<tag>]`.
    #[default]
    Redact,
    /// Emit the digest of the match.
    Hash,
}

/// Content detector definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorRule {
    /// Name of the detector; also the default marker tag.
    pub name: String,

    /// Regex pattern.
    pub pattern: String,

    /// Replacement kind.
    #[serde(default)]
    pub kind: DetectorKind,

    /// Marker tag if different from the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DetectorRule {
    /// Rule emitting `[redacted:<name>]`.
    pub fn literal(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            kind: DetectorKind::Redact,
            tag: None,
            description: None,
        }
    }

    /// Rule emitting the digest of each match.
    pub fn hash(name: &str, pattern: &str) -> Self {
        Self {
            kind: DetectorKind::Hash,
            ..Self::literal(name, pattern)
        }
    }

    /// Compile this rule.
    pub fn compile(&self) -> Result<Detector> {
        let strategy = match self.kind {
            DetectorKind::Redact => {
                Strategy::Literal(self.tag.clone().unwrap_or_else(|| self.name.clone()))
            }
            DetectorKind::Hash => Strategy::HashMatch,
        };
        Detector::new(&self.name, &self.pattern, strategy)
    }
}

impl ScrubPolicy {
    /// Create a new policy with the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy with no rules at all.
    pub fn empty() -> Self {
        Self {
            schema_version: POLICY_SCHEMA_VERSION.to_string(),
            hashed_field_names: Vec::new(),
            redacted_field_names: Vec::new(),
            redacted_field_patterns: Vec::new(),
            detectors: Vec::new(),
            name_value_pairs: false,
        }
    }

    /// Parse a policy from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let policy: ScrubPolicy = serde_json::from_str(content)?;
        Ok(policy)
    }

    /// Load policy from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save policy to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// SHA-256 of the canonical JSON form, for diagnostics.
    pub fn fingerprint(&self) -> String {
        let content = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&content))
    }

    /// Compile the name tables.
    pub fn name_classifier(&self) -> Result<NameClassifier> {
        NameClassifier::new(
            self.hashed_field_names.as_slice(),
            self.redacted_field_names.as_slice(),
            self.redacted_field_patterns.as_slice(),
        )
    }

    /// Compile the detectors.
    pub fn detector_registry(&self) -> Result<DetectorRegistry> {
        let detectors = self
            .detectors
            .iter()
            .map(DetectorRule::compile)
            .collect::<Result<Vec<_>>>()?;
        DetectorRegistry::new(detectors)
    }
}

impl Default for ScrubPolicy {
    fn default() -> Self {
        Self {
            schema_version: POLICY_SCHEMA_VERSION.to_string(),
            hashed_field_names: default_hashed_field_names(),
            redacted_field_names: default_redacted_field_names(),
            redacted_field_patterns: Vec::new(),
            detectors: default_detectors(),
            name_value_pairs: true,
        }
    }
}
