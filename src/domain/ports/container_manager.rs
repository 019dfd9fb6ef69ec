//! Container-manager port.

use async_trait::async_trait;

use crate::domain::errors::ContainerResult;
use crate::domain::models::{
    ContainerInfo, ContainerList, DeployConfig, DeployResponse, ListFilter, LogList,
    StatusResponse,
};

/// Operations offered by the remote container-manager service.
///
/// Every method performs exactly one request. Implementations do not retry,
/// cache, or serialize calls; concurrent calls for the same container race at
/// the server.
#[async_trait]
pub trait ContainerManager: Send + Sync {
    /// Create a container from an opaque deploy payload.
    async fn deploy(&self, config: &DeployConfig) -> ContainerResult<DeployResponse>;

    /// List containers, optionally narrowed by query parameters.
    async fn list(&self, filter: Option<&ListFilter>) -> ContainerResult<ContainerList>;

    /// Fetch a single container.
    async fn get_by_id(&self, id: &str) -> ContainerResult<ContainerInfo>;

    /// Fetch a bounded window of log records.
    ///
    /// `since` is an ISO 8601 timestamp passed through verbatim; `tail` caps
    /// the number of records. Absent values are not sent.
    async fn get_logs(
        &self,
        id: &str,
        since: Option<&str>,
        tail: Option<u32>,
    ) -> ContainerResult<LogList>;

    /// Start a stopped container.
    async fn start(&self, id: &str) -> ContainerResult<StatusResponse>;

    /// Stop a running container, with an optional grace period in seconds.
    async fn stop(&self, id: &str, timeout: Option<u32>) -> ContainerResult<StatusResponse>;

    /// Remove a container.
    async fn remove(&self, id: &str) -> ContainerResult<()>;
}
