//! HTTP adapter for the container-manager API
//!
//! One `reqwest` client, seven endpoints, JSON bodies decoded with serde.

pub mod client;

pub use client::{resource_root, ClientOptions, ContainerClient, DEFAULT_TIMEOUT};
