//! Port trait definitions (Hexagonal Architecture)
//!
//! - ContainerManager: operations of the remote container-manager service
//!
//! The CLI is written against these traits so it stays independent of the
//! HTTP transport.

pub mod container_manager;

pub use container_manager::ContainerManager;
