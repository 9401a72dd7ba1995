//! Runtime configuration from the environment.
//!
//! | Variable                    | Default  |
//! |-----------------------------|----------|
//! | `MARINE_INSIGHT_REFERENCE`  | built-in |
//! | `MARINE_INSIGHT_LOG`        | `info`   |
//! | `MARINE_INSIGHT_LOG_FORMAT` | `pretty` |
//!
//! `RUST_LOG`, when set, takes precedence over `MARINE_INSIGHT_LOG`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const ENV_REFERENCE: &str = "MARINE_INSIGHT_REFERENCE";
pub const ENV_LOG: &str = "MARINE_INSIGHT_LOG";
pub const ENV_LOG_FORMAT: &str = "MARINE_INSIGHT_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    pub fn label(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}' (expected pretty or json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Reference override file; `None` uses the built-in tables
    pub reference_path: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directive
    #[validate(length(min = 1, message = "log filter must not be empty"))]
    pub log_filter: String,

    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = non_empty_var(ENV_REFERENCE) {
            config.reference_path = Some(PathBuf::from(path));
        }
        if let Ok(filter) = env::var(ENV_LOG) {
            config.log_filter = filter.trim().to_string();
        }
        if let Some(format) = non_empty_var(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }

        config
            .validate()
            .map_err(|e| AppError::Config(format!("{}: {}", ENV_LOG, e)))?;
        Ok(config)
    }

    pub fn with_reference_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.reference_path = path;
        }
        self
    }

    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        if let Some(filter) = filter {
            self.log_filter = filter;
        }
        self
    }

    pub fn with_json_logs(mut self, json: bool) -> Self {
        if json {
            self.log_format = LogFormat::Json;
        }
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
