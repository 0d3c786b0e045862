//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables, and
//! command line flags.
//!
//! ```toml
//! log_level = "info"
//! schedule_count = 12
//!
//! [subscription]
//! length = 1
//! unit = "months"
//! start = "2019-01-31"
//! ```

use billing_core::types::Date;
use billing_schedule::interval::{IntervalUnit, MAX_OCCURRENCES};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "BILLING_LOG_LEVEL";
/// Environment variable overriding the default schedule length.
pub const ENV_SCHEDULE_COUNT: &str = "BILLING_SCHEDULE_COUNT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Schedule count outside 1..=MAX_OCCURRENCES.
    #[error("Invalid schedule count: {0}. Must be between 1 and {max}", max = MAX_OCCURRENCES)]
    InvalidScheduleCount(u32),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable holds an unusable value.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-occurrence detail.
    Trace,
    /// Resolved inputs and configuration.
    Debug,
    /// Command lifecycle.
    #[default]
    Info,
    /// Adjusted requests.
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Default subscription used when the command line omits interval arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubscriptionDefaults {
    /// Number of units per interval.
    pub length: Option<u32>,
    /// Interval unit.
    pub unit: Option<IntervalUnit>,
    /// Date of the first occurrence (quoted ISO 8601 string).
    pub start: Option<Date>,
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Number of occurrences `schedule` lists when `--count` is absent
    pub schedule_count: u32,
    /// Default subscription
    pub subscription: SubscriptionDefaults,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            schedule_count: 12,
            subscription: SubscriptionDefaults::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// `lookup` maps a variable name to its value; production code passes
    /// `std::env::var(..).ok()`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(count) = lookup(ENV_SCHEDULE_COUNT) {
            self.schedule_count = count.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a number: {}", ENV_SCHEDULE_COUNT, count))
            })?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_OCCURRENCES).contains(&self.schedule_count) {
            return Err(ConfigError::InvalidScheduleCount(self.schedule_count));
        }
        Ok(())
    }
}

/// Configuration-relevant command line arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose output (raises the log level to debug)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
