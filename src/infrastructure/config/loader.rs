use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Gateway base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Gateway model cannot be empty")]
    EmptyModel,

    #[error("Gateway timeout must be at least 1 second")]
    ZeroTimeout,

    #[error("Progress file path cannot be empty")]
    EmptyProgressPath,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .scandojo/config.yaml (project config, created by init)
    /// 3. .scandojo/local.yaml (project local overrides, optional)
    /// 4. Environment variables (SCANDOJO_* prefix, highest priority)
    ///
    /// Note: Configuration is always project-local (pwd/.scandojo/) so a
    /// machine can host several training directories with separate progress.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            // 1. Start with programmatic defaults
            .merge(Serialized::defaults(Config::default()))
            // 2. Merge project config (primary config, created by init)
            .merge(Yaml::file(".scandojo/config.yaml"))
            // 3. Merge project local overrides (optional, for dev/test overrides)
            .merge(Yaml::file(".scandojo/local.yaml"))
            // 4. Merge environment variables (highest priority)
            .merge(Env::prefixed("SCANDOJO_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate gateway config
        if config.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        if config.gateway.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if config.gateway.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        // Validate storage config
        if config.storage.progress_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyProgressPath);
        }

        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
