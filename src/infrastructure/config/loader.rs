//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::http::resource_root;

/// Project-local configuration file
pub const PROJECT_CONFIG: &str = ".cmctl/config.yaml";

/// Optional project-local overrides, meant to stay out of version control
pub const LOCAL_CONFIG: &str = ".cmctl/local.yaml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "CMCTL_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `client.base_url` is blank
    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    /// `client.base_url` is not an absolute http(s) URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// `client.timeout_ms` is zero
    #[error("Invalid timeout_ms: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// `logging.level` is not a tracing level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .cmctl/config.yaml
    /// 3. .cmctl/local.yaml (optional)
    /// 4. Environment variables (CMCTL_* prefix, `__` separates nested keys)
    ///
    /// The result is not validated; call [`ConfigLoader::validate`] once
    /// command-line overrides have been applied.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG))
            .merge(Yaml::file(LOCAL_CONFIG))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    ///
    /// Like [`ConfigLoader::load`], the result is not validated.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.client.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        resource_root(&config.client.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;

        if config.client.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(config.client.timeout_ms));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
