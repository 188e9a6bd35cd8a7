//! Exit codes for the scrub CLI.
//!
//! These are a stable contract for scripts wrapping the binary.

/// Exit codes for scrub operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    /// Input could not be read or output could not be written
    IoError = 1,

    /// Input is malformed (bad JSON, invalid UTF-8)
    InputError = 2,

    /// Policy could not be loaded or compiled
    PolicyError = 3,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Get the error code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::IoError => "ERR_IO",
            ExitCode::InputError => "ERR_INPUT",
            ExitCode::PolicyError => "ERR_POLICY",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::IoError.as_i32(), 1);
        assert_eq!(ExitCode::InputError.as_i32(), 2);
        assert_eq!(ExitCode::PolicyError.as_i32(), 3);
        assert_eq!(i32::from(ExitCode::PolicyError), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(ExitCode::InputError.to_string(), "ERR_INPUT (2)");
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::IoError.is_success());
    }
}
