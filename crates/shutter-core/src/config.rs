//! Configuration management utilities

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

pub const DATABASE_URL_ENV: &str = "SHUTTER_DATABASE_URL";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shutter.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 20,
            min_connections: 1,
            connect_timeout_secs: Some(30),
            acquire_timeout_secs: Some(30),
        }
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Load the configuration from `SHUTTER_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> ServiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DatabaseConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let url = lookup(DATABASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.url);

        let max_connections =
            parse_var(&lookup, "SHUTTER_DB_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections);
        let min_connections =
            parse_var(&lookup, "SHUTTER_DB_MIN_CONNECTIONS")?.unwrap_or(defaults.min_connections);

        if min_connections > max_connections {
            return Err(ServiceError::Configuration {
                message: format!(
                    "SHUTTER_DB_MIN_CONNECTIONS ({}) exceeds SHUTTER_DB_MAX_CONNECTIONS ({})",
                    min_connections, max_connections
                ),
            });
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout_secs: parse_var(&lookup, "SHUTTER_DB_CONNECT_TIMEOUT")?
                .or(defaults.connect_timeout_secs),
            acquire_timeout_secs: parse_var(&lookup, "SHUTTER_DB_ACQUIRE_TIMEOUT")?
                .or(defaults.acquire_timeout_secs),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> ServiceResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ServiceError::Configuration {
                message: format!("{} has an invalid value: {}", key, raw),
            }),
    }
}

/// Paging directive handed to the pagination stage.
///
/// Both fields are optional; an absent limit returns every remaining row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PaginationParams {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self { limit, offset }
    }

    /// First `limit` rows.
    pub fn first(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }
}

/// Logging configuration consumed by [`crate::telemetry::init_tracing`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Full,
}

impl std::str::FromStr for LogFormat {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "full" => Ok(LogFormat::Full),
            other => Err(ServiceError::Configuration {
                message: format!("Unknown log format: {}", other),
            }),
        }
    }
}
