//! Logging setup for the scrub CLI.
//!
//! Supports configuration via:
//! - Environment variables (SCRUBBER_LOG, RUST_LOG, SCRUBBER_LOG_FORMAT)
//! - CLI flags (--log-level, --log-format)
//!
//! stdout is reserved for scrubbed payloads; all logs go to stderr.

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Level variable, checked before `RUST_LOG`.
pub const ENV_LOG: &str = "SCRUBBER_LOG";

/// Format variable.
pub const ENV_LOG_FORMAT: &str = "SCRUBBER_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console format (default).
    #[default]
    Human,
    /// Machine-parseable JSON lines.
    Jsonl,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "console" | "pretty" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// Default; a filter tool stays quiet unless something is wrong.
    #[default]
    Warn,
    Error,
    /// Completely silent.
    Off,
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" | "quiet" => Ok(LogLevel::Off),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Minimum log level.
    pub level: LogLevel,
}

impl LogConfig {
    /// Create config from environment and CLI overrides.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::resolve(
            std::env::var(ENV_LOG).ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var(ENV_LOG_FORMAT).ok().as_deref(),
            cli_level,
            cli_format,
        )
    }

    fn resolve(
        scrubber_log: Option<&str>,
        rust_log: Option<&str>,
        log_format: Option<&str>,
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
    ) -> Self {
        let mut config = LogConfig::default();

        // SCRUBBER_LOG takes precedence over RUST_LOG
        if let Some(val) = scrubber_log {
            if let Ok(level) = val.parse::<LogLevel>() {
                config.level = level;
            }
        } else if let Some(val) = rust_log {
            if val.contains("trace") {
                config.level = LogLevel::Trace;
            } else if val.contains("debug") {
                config.level = LogLevel::Debug;
            } else if val.contains("info") {
                config.level = LogLevel::Info;
            } else if val.contains("error") {
                config.level = LogLevel::Error;
            }
        }

        if let Some(format) = log_format.and_then(|v| v.parse::<LogFormat>().ok()) {
            config.format = format;
        }

        // CLI overrides take final precedence
        if let Some(level) = cli_level {
            config.level = level;
        }
        if let Some(format) = cli_format {
            config.format = format;
        }

        config
    }
}

/// Initialize the logging subsystem on stderr.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::new(format!("scrub={0},scrubber={0}", config.level));

    match config.format {
        LogFormat::Human => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal());
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .init();
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("jsonl".parse::<LogFormat>().unwrap(), LogFormat::Jsonl);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Jsonl);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("quiet".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::resolve(None, None, None, None, None);
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn test_scrubber_log_beats_rust_log() {
        let config = LogConfig::resolve(Some("error"), Some("trace"), None, None, None);
        assert_eq!(config.level, LogLevel::Error);

        let config = LogConfig::resolve(None, Some("scrubber=debug"), None, None, None);
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = LogConfig::resolve(
            Some("error"),
            None,
            Some("jsonl"),
            Some(LogLevel::Trace),
            Some(LogFormat::Human),
        );
        assert_eq!(config.level, LogLevel::Trace);
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn test_format_from_env() {
        let config = LogConfig::resolve(None, None, Some("json"), None, None);
        assert_eq!(config.format, LogFormat::Jsonl);
    }
}
