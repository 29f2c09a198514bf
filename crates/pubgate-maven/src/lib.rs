//! Maven repository protocol for publishing: POM and metadata generation,
//! checksum sidecars, authenticated upload, and local repository install.

pub mod auth;
pub mod checksum;
pub mod local;
pub mod metadata;
pub mod pom;
pub mod publish;
pub mod repository;
pub mod upload;

mod xml;
