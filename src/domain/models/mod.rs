//! Domain models: API payloads and application configuration.

pub mod config;
pub mod container;

pub use config::{ClientSettings, Config, LogFormat, LoggingConfig, RotationPolicy};
pub use container::{
    ContainerInfo, ContainerList, DeployConfig, DeployResponse, ListFilter, LogEntry, LogList,
    StatusResponse,
};
