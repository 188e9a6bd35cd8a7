//! Policy file discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG paths →
//! system config → built-in default.

use crate::error::Result;
use crate::ScrubPolicy;
use std::path::{Path, PathBuf};

/// Where the policy was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicySource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/scrubber/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for PolicySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicySource::CliArgument => write!(f, "CLI argument"),
            PolicySource::Environment => write!(f, "environment variable"),
            PolicySource::XdgConfig => write!(f, "XDG config"),
            PolicySource::SystemConfig => write!(f, "system config"),
            PolicySource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_POLICY_PATH: &str = "SCRUBBER_POLICY";
pub const ENV_CONFIG_DIR: &str = "SCRUBBER_CONFIG_DIR";

/// Standard policy file name.
pub const POLICY_FILENAME: &str = "policy.json";

/// Application name for XDG directories.
const APP_NAME: &str = "scrubber";

/// A resolved policy path.
#[derive(Debug, Clone, Default)]
pub struct PolicyPath {
    /// Path to policy.json (or None for the built-in policy).
    pub path: Option<PathBuf>,

    /// Where it came from.
    pub source: PolicySource,
}

/// A loaded policy with its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedPolicy {
    pub policy: ScrubPolicy,
    pub path: Option<PathBuf>,
    pub source: PolicySource,
}

/// Resolve the policy path.
///
/// An explicit CLI path is returned even if it does not exist, so loading it
/// reports the error instead of silently falling back.
pub fn resolve_policy(cli_path: Option<&Path>) -> PolicyPath {
    // 1. CLI argument
    if let Some(path) = cli_path {
        return PolicyPath {
            path: Some(path.to_path_buf()),
            source: PolicySource::CliArgument,
        };
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_POLICY_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return found(path, PolicySource::Environment);
        }
    }

    // 3. Environment variable (config dir)
    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(POLICY_FILENAME);
        if path.exists() {
            return found(path, PolicySource::Environment);
        }
    }

    // 4. XDG config directory
    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(POLICY_FILENAME);
        if path.exists() {
            return found(path, PolicySource::XdgConfig);
        }
    }

    // 5. System config
    let system_path = system_config_dir().join(POLICY_FILENAME);
    if system_path.exists() {
        return found(system_path, PolicySource::SystemConfig);
    }

    PolicyPath::default()
}

fn found(path: PathBuf, source: PolicySource) -> PolicyPath {
    PolicyPath {
        path: Some(path),
        source,
    }
}

/// Resolve and load the policy.
pub fn load_policy(cli_path: Option<&Path>) -> Result<ResolvedPolicy> {
    let PolicyPath { path, source } = resolve_policy(cli_path);
    let policy = match &path {
        Some(p) => ScrubPolicy::load(p)?,
        None => ScrubPolicy::default(),
    };

    tracing::debug!(
        source = %source,
        path = ?path,
        fingerprint = %policy.fingerprint(),
        "scrub policy loaded"
    );

    Ok(ResolvedPolicy {
        policy,
        path,
        source,
    })
}

/// Get the XDG config directory for the scrubber.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}
