use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOG_FILTER_ENV: &str = "RUST_LOG";
pub const LOG_FORMAT_ENV: &str = "PRODCAT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(ConfigError::InvalidEnvOverride {
                key: LOG_FORMAT_ENV.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `info,prodcat_catalog=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read settings from the process environment.
    ///
    /// An unparseable `PRODCAT_LOG_FORMAT` falls back to the default format with a
    /// warning printed to stderr, since the subscriber is not installed yet.
    pub fn from_env() -> Self {
        Self::from_lookup_or_default(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_lookup`], but an invalid format is replaced by the default
    /// while the filter from `lookup` is kept.
    pub fn from_lookup_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match Self::from_lookup(&lookup) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}; using default log format");
                let filter = lookup(LOG_FILTER_ENV).filter(|f| !f.trim().is_empty());
                Self {
                    filter: filter.unwrap_or_else(|| DEFAULT_FILTER.to_string()),
                    format: LogFormat::default(),
                }
            }
        }
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}
