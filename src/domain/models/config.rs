//! Application configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for ScanDojo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Text-generation gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Progress storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gemini gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GatewayConfig {
    /// API key; when unset the `GEMINI_API_KEY` environment variable is
    /// consulted at call time
    #[serde(default)]
    pub api_key: Option<String>,

    /// Service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    /// API key from config, else from the `GEMINI_API_KEY` environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }

    /// Returns the config with an explicit API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Returns the config with a custom model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Progress storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Path of the progress JSON file
    #[serde(default = "default_progress_path")]
    pub progress_path: PathBuf,
}

fn default_progress_path() -> PathBuf {
    PathBuf::from(".scandojo/progress.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            progress_path: default_progress_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for the rolling JSON log file; unset disables file logging
    #[serde(default = "default_log_dir")]
    pub dir: Option<PathBuf>,

    /// Whether to also log to stderr
    #[serde(default = "default_stderr")]
    pub stderr: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_log_dir() -> Option<PathBuf> {
    // Off by default so commands run outside an initialized directory leave
    // no files behind; the init template turns file logging on.
    None
}

const fn default_stderr() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
            stderr: default_stderr(),
        }
    }
}
