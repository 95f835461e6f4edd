//! Application-level configuration
//!
//! Defines where the platform lives, where the access credential comes
//! from, and how loudly the tool logs. The credential itself is never
//! part of the configuration: only the name of the environment variable
//! holding it is.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Embedded default configuration file
const DEFAULT_CONFIG: &str = include_str!("../../greenflux.config.toml");

/// Configuration file name
const CONFIG_FILE_NAME: &str = "greenflux.config.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Platform API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the usual places, falling back to the
    /// embedded defaults.
    ///
    /// Lookup order: `greenflux.config.toml` in the current directory,
    /// then `~/.greenflux/greenflux.config.toml`, then the path named
    /// by `CONFIG_PATH`. The tool never writes a config file on its
    /// own.
    pub fn load() -> Result<Self> {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_NAME) {
            return toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", CONFIG_FILE_NAME, e));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            let home_config = base_dirs
                .home_dir()
                .join(".greenflux")
                .join(CONFIG_FILE_NAME);
            if let Ok(content) = std::fs::read_to_string(&home_config) {
                return toml::from_str(&content).map_err(|e| {
                    anyhow::anyhow!("Failed to parse {}: {}", home_config.display(), e)
                });
            }
        }

        if let Ok(config_path) = std::env::var("CONFIG_PATH") {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                return toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", config_path, e));
            }
        }

        Self::embedded_default()
    }

    /// Load configuration from a specific file path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here: the
    /// caller asked for this file explicitly.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Parse the compiled-in default configuration
    pub fn embedded_default() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG)
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded default config: {}", e))
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("GREENFLUX_API_BASE") {
            self.api.base_url = base_url;
        }
        if let Ok(source) = std::env::var("GREENFLUX_API_KEY_SOURCE") {
            self.api.api_key_source = source;
        }
        if let Ok(level) = std::env::var("GREENFLUX_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(anyhow::anyhow!("API base URL cannot be empty"));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "API base URL must be http(s), got {}",
                self.api.base_url
            ));
        }

        if self.api.api_key_source.is_empty() {
            return Err(anyhow::anyhow!("API key source cannot be empty"));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow::anyhow!("Invalid log level: {}", self.logging.level)),
        }

        Ok(())
    }

    /// Get a summary of the configuration. Names the key's source, never
    /// the key.
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Configuration loaded:\n");
        summary.push_str(&format!("API Base: {}\n", self.api.base_url));
        summary.push_str(&format!("API Key Source: {}\n", self.api.api_key_source));
        summary.push_str(&format!("Logging Level: {}\n", self.logging.level));
        summary
    }
}

/// Platform API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the agent API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_source")]
    pub api_key_source: String,
}

impl ApiConfig {
    /// Read the access credential from the configured environment
    /// variable at submission time.
    pub fn resolve_api_key(&self) -> Result<String> {
        let key = std::env::var(&self.api_key_source).with_context(|| {
            format!(
                "API key not found: set the {} environment variable",
                self.api_key_source
            )
        })?;
        if key.trim().is_empty() {
            anyhow::bail!("API key in {} is empty", self.api_key_source);
        }
        Ok(key)
    }
}

fn default_base_url() -> String {
    crate::client::DEFAULT_BASE_URL.to_string()
}

fn default_api_key_source() -> String {
    "OMNIDIM_API_KEY".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_source: default_api_key_source(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
