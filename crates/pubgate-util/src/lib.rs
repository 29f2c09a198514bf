//! Shared utilities for pubgate.
//!
//! Cross-cutting concerns used by the other pubgate crates: the unified error
//! type, filesystem helpers, checksum hashing, and terminal status output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
