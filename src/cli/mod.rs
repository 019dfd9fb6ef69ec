//! Command-line interface
//!
//! Argument model (clap), command handlers and output formatting.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;

use crate::domain::errors::ContainerApiError;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

impl Cli {
    /// Load configuration, apply command-line overrides, then validate
    ///
    /// Flags have the highest precedence, so a flag can replace an invalid
    /// value coming from a file or the environment.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match self.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        self.apply_overrides(&mut config);
        ConfigLoader::validate(&config)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref base_url) = self.base_url {
            config.client.base_url.clone_from(base_url);
        }
        if let Some(ref token) = self.token {
            config.client.token = Some(token.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.client.timeout_ms = timeout_ms;
        }
    }
}

/// Print an error to stderr and exit with status 1
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let status = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ContainerApiError>())
        .and_then(ContainerApiError::status);

    if json {
        let payload = serde_json::json!({
            "error": format!("{err:#}"),
            "status": status.map(|s| s.as_u16()),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }

    std::process::exit(1)
}
