//! Configuration loading and management
//!
//! Configuration is an explicit value built once in `main` and passed
//! down; nothing reads ambient global state after startup. A YAML file is
//! optional and individual environment variables override it.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Environment variable naming the YAML config file
pub const CONFIG_FILE_ENV: &str = "ATELIER_CONFIG";

/// Environment variable overriding the bind address
pub const BIND_ADDR_ENV: &str = "ATELIER_BIND_ADDR";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "ATELIER_LOG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Tracing filter directive (e.g. "info", "atelier=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::IoError {
            path: path.to_string(),
            message: err.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|err| ConfigError::ParseError {
            file: path.to_string(),
            message: err.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|err| ConfigError::ParseError {
            file: "<inline>".to_string(),
            message: err.to_string(),
        })
    }

    /// Build the effective configuration: the file named by
    /// `ATELIER_CONFIG` (defaults when unset), then per-variable
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(bind_addr) = std::env::var(BIND_ADDR_ENV) {
            config.bind_addr = bind_addr;
        }
        if let Ok(log_filter) = std::env::var(LOG_FILTER_ENV) {
            config.log_filter = log_filter;
        }

        Ok(config)
    }
}
