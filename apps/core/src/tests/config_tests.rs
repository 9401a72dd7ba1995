//! Configuration Tests
//!
//! Environment-driven configuration, using scoped variables.

use std::path::PathBuf;

use crate::config::{AppConfig, LogFormat, ENV_LOG, ENV_LOG_FORMAT, ENV_REFERENCE};
use crate::error::AppError;

fn with_env<F: FnOnce()>(reference: Option<&str>, log: Option<&str>, format: Option<&str>, f: F) {
    temp_env::with_vars(
        [
            (ENV_REFERENCE, reference),
            (ENV_LOG, log),
            (ENV_LOG_FORMAT, format),
        ],
        f,
    );
}

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_unset_environment_gives_defaults() {
        with_env(None, None, None, || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config, AppConfig::default());
        });
    }

    #[test]
    fn test_all_variables_read() {
        with_env(
            Some("/srv/marine/tables.json"),
            Some("marine_insight=debug"),
            Some("JSON"),
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(
                    config.reference_path,
                    Some(PathBuf::from("/srv/marine/tables.json"))
                );
                assert_eq!(config.log_filter, "marine_insight=debug");
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        with_env(Some("  "), None, Some(""), || {
            let config = AppConfig::from_env().unwrap();
            assert!(config.reference_path.is_none());
            assert_eq!(config.log_format, LogFormat::Pretty);
        });
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        with_env(None, None, Some("yaml"), || {
            let result = AppConfig::from_env();
            assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("yaml")));
        });
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        with_env(None, Some("   "), None, || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_cli_flags_override_environment() {
        with_env(Some("/from/env.json"), Some("warn"), None, || {
            let config = AppConfig::from_env()
                .unwrap()
                .with_reference_path(Some(PathBuf::from("/from/flag.json")))
                .with_log_filter(None)
                .with_json_logs(true);

            assert_eq!(config.reference_path, Some(PathBuf::from("/from/flag.json")));
            assert_eq!(config.log_filter, "warn");
            assert_eq!(config.log_format, LogFormat::Json);
        });
    }
}
