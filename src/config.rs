//! flightlog configuration.
//!
//! Loaded from `~/.flightlog/config.toml`. Every key is optional; a missing
//! file means defaults.
//!
//! The log directory is resolved through a chain:
//!
//! 1. `--log-dir <dir>` flag
//! 2. `FLIGHTLOG_LOG_DIR` env var
//! 3. `log-dir` in the config file
//! 4. `~/Saved Games/Frontier Developments/Elite Dangerous`

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::bridge::DEFAULT_MAX_CONSECUTIVE_ERRORS;
use crate::logdir::{LogDir, RetryPolicy, UnreadableJournal};

/// Environment variable naming the log directory.
pub const LOG_DIR_ENV: &str = "FLIGHTLOG_LOG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Where the game writes its logs.
    pub log_dir: Option<PathBuf>,

    pub unreadable_journal: UnreadableJournal,

    pub retry: RetryConfig,

    pub bridge: BridgeConfig,
}

/// Snapshot read retries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RetryConfig {
    pub attempts: u32,
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            attempts: policy.max_attempts,
            delay_ms: u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.attempts,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

/// The `bridge` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Serial device, e.g. `/dev/ttyACM0` or `COM3`.
    pub port: Option<String>,
    pub baud_rate: u32,
    pub poll_interval_ms: u64,
    pub max_consecutive_errors: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 9600,
            poll_interval_ms: 500,
            max_consecutive_errors: DEFAULT_MAX_CONSECUTIVE_ERRORS,
        }
    }
}

impl BridgeConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Config {
    /// Load config from `path`, or `~/.flightlog/config.toml` when `None`.
    ///
    /// A missing default file yields defaults. A missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        Self::parse(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The config file path: `~/.flightlog/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".flightlog").join("config.toml"))
    }

    /// Resolve the log directory through the chain in the module docs.
    pub fn resolve_log_dir(&self, explicit: Option<&Path>) -> Result<PathBuf, String> {
        self.resolve_log_dir_with(explicit, env::var_os(LOG_DIR_ENV).map(PathBuf::from))
    }

    fn resolve_log_dir_with(
        &self,
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
    ) -> Result<PathBuf, String> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }

        if let Some(dir) = from_env
            && !dir.as_os_str().is_empty()
        {
            return Ok(dir);
        }

        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }

        LogDir::default_root().ok_or_else(|| {
            format!("could not determine home directory: pass --log-dir or set {LOG_DIR_ENV}")
        })
    }

    /// Build a [`LogDir`] for `root` with the configured policies.
    pub fn log_dir(&self, root: PathBuf) -> LogDir {
        LogDir::new(root)
            .with_retry(self.retry.policy())
            .with_unreadable(self.unreadable_journal)
    }
}
