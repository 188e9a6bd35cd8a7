//! Error types for the scrubber.

use thiserror::Error;

/// Result type for scrubber operations.
pub type Result<T> = std::result::Result<T, ScrubError>;

/// Errors that can occur while building a scrubber or scrubbing data.
///
/// Messages name rules, fields and positions only. They never carry the
/// values being scrubbed.
#[derive(Error, Debug)]
pub enum ScrubError {
    /// The top-level value cannot be traversed (not a composite).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input given to the JSON adapter is not well-formed JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The scrub policy is inconsistent.
    #[error("policy error: {0}")]
    Policy(String),

    /// A rule's regex failed to compile.
    #[error("pattern error in rule '{name}': {source}")]
    Pattern {
        /// Name of the offending rule.
        name: String,
        #[source]
        source: regex::Error,
    },

    /// I/O error while reading or writing a policy file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrubError {
    /// Create an invalid input error for a value of the given shape.
    pub fn not_composite(shape: crate::Shape) -> Self {
        ScrubError::InvalidInput(format!(
            "expected a record, map or sequence at the top level, got {}",
            shape
        ))
    }

    /// Whether the error was caused by the caller's data rather than configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ScrubError::InvalidInput(_) | ScrubError::Parse(_))
    }
}
