//! Global tracing subscriber for the binary.
//!
//! Library code only emits events; installing a subscriber is left to the
//! process entry point.

use std::io;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;

/// Filter from `RUST_LOG` if set, else the configured directive.
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Installs the global subscriber, writing to stderr so stdout stays clean
/// for JSON output.
pub fn init(config: &AppConfig) -> Result<(), AppError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .with_target(true);

    let result = match config.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install log subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_filter_falls_back_to_config() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let config = AppConfig::default().with_log_filter(Some("warn".to_string()));
            assert_eq!(env_filter(&config).max_level_hint(), Some(LevelFilter::WARN));
        });
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        temp_env::with_var("RUST_LOG", Some("debug"), || {
            let config = AppConfig::default();
            assert_eq!(env_filter(&config).max_level_hint(), Some(LevelFilter::DEBUG));
        });
    }
}
