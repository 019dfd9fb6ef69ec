//! Infrastructure layer module
//!
//! This module contains the adapters and ambient services:
//! - Container-manager HTTP client (reqwest)
//! - Configuration management (figment)
//! - Logging infrastructure (tracing-subscriber)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod http;
pub mod logging;
