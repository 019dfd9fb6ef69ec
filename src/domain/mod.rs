//! Domain layer for cmctl
//!
//! Data-transfer shapes of the container-manager API, the application
//! configuration model, and the port trait the HTTP adapter implements.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ContainerApiError, ContainerResult};
