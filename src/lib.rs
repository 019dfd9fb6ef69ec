//! cmctl - typed client for the container-manager HTTP API
//!
//! Maps the seven container-manager endpoints (deploy, list, inspect, logs,
//! start, stop, remove) onto async methods with serde-decoded results.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): DTOs, configuration model, the `ContainerManager` port
//! - **Infrastructure Layer** (`infrastructure`): reqwest client, figment config, tracing setup
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use cmctl::{ClientOptions, ContainerClient, ContainerManager, ListFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContainerClient::new("http://localhost:3000", ClientOptions::default())?;
//! let running = client
//!     .list(Some(&ListFilter::new().with("status", "running")))
//!     .await?;
//! for container in running.containers {
//!     println!("{} {:?}", container.id, container.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{ContainerApiError, ContainerResult};
pub use domain::models::{
    ClientSettings, Config, ContainerInfo, ContainerList, DeployConfig, DeployResponse,
    ListFilter, LogEntry, LogList, LoggingConfig, StatusResponse,
};
pub use domain::ports::ContainerManager;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::{ClientOptions, ContainerClient};
