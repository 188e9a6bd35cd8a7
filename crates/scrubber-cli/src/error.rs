//! CLI error type.

use crate::exit_codes::ExitCode;
use scrubber::ScrubError;
use thiserror::Error;

/// Errors surfaced by scrub subcommands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading or compiling the policy failed.
    #[error("policy: {0}")]
    Policy(#[source] ScrubError),

    /// Scrubbing the input failed.
    #[error(transparent)]
    Scrub(#[from] ScrubError),

    /// Reading the input failed.
    #[error("cannot read {input}: {source}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("cannot write output: {0}")]
    Write(#[source] std::io::Error),
}

impl CliError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Policy(_) => ExitCode::PolicyError,
            CliError::Scrub(e) if e.is_input_error() => ExitCode::InputError,
            CliError::Scrub(_) => ExitCode::IoError,
            CliError::Read { source, .. } if source.kind() == std::io::ErrorKind::InvalidData => {
                ExitCode::InputError
            }
            CliError::Read { .. } | CliError::Write(_) => ExitCode::IoError,
        }
    }
}
