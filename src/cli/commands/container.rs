//! Container commands: one handler per container-manager operation.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::cli::output::table::format_logs;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::Commands;
use crate::domain::models::{
    ContainerInfo, ContainerList, DeployConfig, DeployResponse, ListFilter, LogList,
};
use crate::domain::ports::ContainerManager;

impl CommandOutput for DeployResponse {
    fn to_human(&self) -> String {
        format!("Container deployed: {}", style(&self.id).bold())
    }
}

impl CommandOutput for ContainerList {
    fn to_human(&self) -> String {
        if self.containers.is_empty() {
            return "No containers found.".to_string();
        }
        TableFormatter::new().format_containers(&self.containers)
    }
}

impl CommandOutput for ContainerInfo {
    fn to_human(&self) -> String {
        TableFormatter::new().format_container_detail(self)
    }
}

impl CommandOutput for LogList {
    fn to_human(&self) -> String {
        if self.logs.is_empty() {
            return "No log records.".to_string();
        }
        format_logs(&self.logs)
    }
}

/// Result of start and stop
#[derive(Debug, Serialize)]
pub struct StatusChangeOutput {
    /// Container ID
    pub id: String,
    /// "started" or "stopped"
    pub action: &'static str,
    /// Status reported by the service
    pub status: String,
}

impl CommandOutput for StatusChangeOutput {
    fn to_human(&self) -> String {
        format!(
            "{} {}: {}",
            self.action,
            self.id,
            style(&self.status).cyan()
        )
    }
}

/// Result of remove
#[derive(Debug, Serialize)]
pub struct RemovedOutput {
    /// Container ID
    pub id: String,
    /// Always true; present for scripts consuming JSON output
    pub removed: bool,
}

impl CommandOutput for RemovedOutput {
    fn to_human(&self) -> String {
        format!("Container removed: {}", self.id)
    }
}

/// Dispatch a parsed command to its handler
pub async fn execute(command: Commands, manager: &dyn ContainerManager, json: bool) -> Result<()> {
    match command {
        Commands::Deploy { file } => handle_deploy(manager, &file, json).await,
        Commands::List { filters } => handle_list(manager, filters, json).await,
        Commands::Get { id } => handle_get(manager, &id, json).await,
        Commands::Logs { id, since, tail } => {
            handle_logs(manager, &id, since.as_deref(), tail, json).await
        }
        Commands::Start { id } => handle_start(manager, &id, json).await,
        Commands::Stop { id, timeout } => handle_stop(manager, &id, timeout, json).await,
        Commands::Remove { id } => handle_remove(manager, &id, json).await,
    }
}

/// Handle deploy command
pub async fn handle_deploy(manager: &dyn ContainerManager, file: &Path, json: bool) -> Result<()> {
    let config = read_deploy_config(file)?;
    let created = manager
        .deploy(&config)
        .await
        .context("Failed to deploy container")?;
    output(&created, json);
    Ok(())
}

/// Handle list command
pub async fn handle_list(
    manager: &dyn ContainerManager,
    filters: Vec<(String, String)>,
    json: bool,
) -> Result<()> {
    let filter = filters
        .into_iter()
        .fold(ListFilter::new(), |filter, (key, value)| filter.with(key, value));
    let filter = (!filter.is_empty()).then_some(filter);

    let containers = manager
        .list(filter.as_ref())
        .await
        .context("Failed to list containers")?;
    output(&containers, json);
    Ok(())
}

/// Handle get command
pub async fn handle_get(manager: &dyn ContainerManager, id: &str, json: bool) -> Result<()> {
    let container = manager
        .get_by_id(id)
        .await
        .with_context(|| format!("Failed to get container {id}"))?;
    output(&container, json);
    Ok(())
}

/// Handle logs command
pub async fn handle_logs(
    manager: &dyn ContainerManager,
    id: &str,
    since: Option<&str>,
    tail: Option<u32>,
    json: bool,
) -> Result<()> {
    let logs = manager
        .get_logs(id, since, tail)
        .await
        .with_context(|| format!("Failed to fetch logs for container {id}"))?;
    output(&logs, json);
    Ok(())
}

/// Handle start command
pub async fn handle_start(manager: &dyn ContainerManager, id: &str, json: bool) -> Result<()> {
    let response = manager
        .start(id)
        .await
        .with_context(|| format!("Failed to start container {id}"))?;
    output(
        &StatusChangeOutput {
            id: id.to_string(),
            action: "started",
            status: response.status,
        },
        json,
    );
    Ok(())
}

/// Handle stop command
pub async fn handle_stop(
    manager: &dyn ContainerManager,
    id: &str,
    timeout: Option<u32>,
    json: bool,
) -> Result<()> {
    let response = manager
        .stop(id, timeout)
        .await
        .with_context(|| format!("Failed to stop container {id}"))?;
    output(
        &StatusChangeOutput {
            id: id.to_string(),
            action: "stopped",
            status: response.status,
        },
        json,
    );
    Ok(())
}

/// Handle remove command
pub async fn handle_remove(manager: &dyn ContainerManager, id: &str, json: bool) -> Result<()> {
    manager
        .remove(id)
        .await
        .with_context(|| format!("Failed to remove container {id}"))?;
    output(
        &RemovedOutput {
            id: id.to_string(),
            removed: true,
        },
        json,
    );
    Ok(())
}

/// Read a deploy payload from a file, or from stdin when the path is "-".
pub fn read_deploy_config(path: &Path) -> Result<DeployConfig> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read deploy payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deploy payload from {}", path.display()))?
    };

    parse_deploy_config(&raw)
}

/// Parse a deploy payload; it must be a JSON object.
pub fn parse_deploy_config(raw: &str) -> Result<DeployConfig> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("Deploy payload is not valid JSON")?;
    DeployConfig::try_from(value)
        .map_err(|other| anyhow::anyhow!("Deploy payload must be a JSON object, got {other}"))
}
