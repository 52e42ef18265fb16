//! Logging configuration.
//!
//! - `LOG_LEVEL`: default filter level for this application (default: `info`)
//! - `LOG_DIR`: directory for rotated log files (default: `storage/logs`)
//! - `LOG_FORMAT`: console output, `compact` (default) or `json`

use std::str::FromStr;

use crate::env::{or_default, parsed_or};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            level: or_default("LOG_LEVEL", "info"),
            directory: or_default("LOG_DIR", "storage/logs"),
            format: parsed_or("LOG_FORMAT", LogFormat::Compact)?,
        })
    }
}
