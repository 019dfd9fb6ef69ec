//! CLI command implementations.

pub mod container;
