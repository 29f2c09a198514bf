//! Core data types for pubgate.
//!
//! This crate holds the configuration input model and its layering rules, the
//! publication target resolver, the `Pubgate.toml` project manifest, project
//! and module discovery, and the global user configuration.
//!
//! This crate is intentionally free of async code and network I/O.

/// File name of the project manifest at the build root.
pub const MANIFEST_FILE: &str = "Pubgate.toml";

pub mod config;
pub mod coordinate;
pub mod manifest;
pub mod options;
pub mod project;
pub mod properties;
pub mod resolver;
