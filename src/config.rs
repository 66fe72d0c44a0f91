//! Configuration management for the contact directory.
//!
//! Settings are read from environment variables, with an optional `.env` file
//! loaded first. None of them change the validation rules; they only tune
//! logging, metrics and map pre-allocation.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for a contact directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Number of entries to pre-allocate in the directory map (default: 0)
    pub initial_capacity: usize,

    /// Whether directory operations update metrics counters (default: true)
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_DIRECTORY_INITIAL_CAPACITY`: Pre-allocated entries (default: 0)
    /// - `CONTACT_DIRECTORY_METRICS`: Enable metrics counters (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let initial_capacity = Self::parse_env_usize("CONTACT_DIRECTORY_INITIAL_CAPACITY", 0)?;
        let metrics_enabled = Self::parse_env_bool("CONTACT_DIRECTORY_METRICS", true)?;

        Ok(Config {
            log_level,
            initial_capacity,
            metrics_enabled,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            initial_capacity: 0,
            metrics_enabled: true,
        }
    }
}
