//! High-level operations behind the `pubgate` commands.
//!
//! The resolver in `pubgate-core` only computes a [`Resolution`]; this crate
//! acts on it: it fails fast, picks the single destination, plans which
//! modules publish, and runs the publication.
//!
//! [`Resolution`]: pubgate_core::resolver::Resolution

pub mod destination;
pub mod ops_env;
pub mod ops_publish;
pub mod ops_repos;
pub mod ops_resolve;
pub mod plan;
