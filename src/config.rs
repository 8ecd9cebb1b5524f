//! App Configuration
//!
//! Display settings read from the bundled `app-config.json`.

use serde::Deserialize;
use thiserror::Error;

/// Bundled configuration document
const BUNDLED_CONFIG: &str = include_str!("../app-config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0:?}")]
    LogLevel(String),
}

/// Display and logging settings; keys missing from the JSON keep their defaults
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Header title on the home screen
    pub title: String,
    /// Currency unit shown after prices
    pub currency: String,
    /// `log` level filter name ("error" .. "trace")
    pub log_level: String,
    /// How long a notice stays visible, in milliseconds
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Christoffel's Cuisine".to_string(),
            currency: "R".to_string(),
            log_level: "info".to_string(),
            notice_timeout_ms: 3000,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Load the bundled config, falling back to defaults when it is broken
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
