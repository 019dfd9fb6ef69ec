//! CLI argument types.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "cmctl")]
#[command(about = "cmctl - container-manager API client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .cmctl/config.yaml and .cmctl/local.yaml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the container-manager service
    #[arg(long, global = true, env = "CMCTL_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long, global = true, env = "CMCTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

/// Container-manager subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a container from a JSON payload
    Deploy {
        /// Path to the JSON deploy payload, or "-" for stdin
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,
    },

    /// List containers
    #[command(alias = "ls")]
    List {
        /// Filter as key=value; may be repeated
        #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        filters: Vec<(String, String)>,
    },

    /// Show one container
    #[command(alias = "inspect")]
    Get {
        /// Container ID
        id: String,
    },

    /// Fetch container logs
    Logs {
        /// Container ID
        id: String,

        /// Only records after this RFC 3339 timestamp
        #[arg(long, value_parser = parse_timestamp)]
        since: Option<String>,

        /// Number of most recent records
        #[arg(short = 'n', long)]
        tail: Option<u32>,
    },

    /// Start a container
    Start {
        /// Container ID
        id: String,
    },

    /// Stop a container
    Stop {
        /// Container ID
        id: String,

        /// Seconds to wait before the service kills the container
        #[arg(short, long)]
        timeout: Option<u32>,
    },

    /// Remove a container
    #[command(name = "rm", alias = "remove")]
    Remove {
        /// Container ID
        id: String,
    },
}

/// Parse a `key=value` filter argument.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Validate an RFC 3339 timestamp and keep it exactly as typed.
pub fn parse_timestamp(raw: &str) -> Result<String, String> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|_| raw.to_string())
        .map_err(|e| format!("invalid RFC 3339 timestamp '{raw}': {e}"))
}
