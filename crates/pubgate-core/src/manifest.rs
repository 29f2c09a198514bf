use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use pubgate_util::errors::PubgateError;

use crate::coordinate::{is_snapshot_version, Coordinate};

/// The parsed representation of a `Pubgate.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub project: ProjectMetadata,

    #[serde(default)]
    pub repositories: BTreeMap<String, RepositoryEntry>,

    #[serde(default)]
    pub modules: BTreeMap<String, ModuleConfig>,
}

/// Root project identity from the `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub group: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A dependency-read repository, either a URL string or a detailed entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RepositoryEntry {
    Url(String),
    Detailed {
        url: String,
        #[serde(default)]
        content: ContentFilter,
    },
}

impl RepositoryEntry {
    pub fn url(&self) -> &str {
        match self {
            RepositoryEntry::Url(url) => url,
            RepositoryEntry::Detailed { url, .. } => url,
        }
    }

    pub fn content(&self) -> ContentFilter {
        match self {
            RepositoryEntry::Url(_) => ContentFilter::Any,
            RepositoryEntry::Detailed { content, .. } => *content,
        }
    }
}

/// Which versions a read repository may serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Releases,
    Snapshots,
    #[default]
    Any,
}

impl ContentFilter {
    /// Whether a repository with this filter may serve `version`.
    pub fn accepts(self, version: &str) -> bool {
        match self {
            ContentFilter::Releases => !is_snapshot_version(version),
            ContentFilter::Snapshots => is_snapshot_version(version),
            ContentFilter::Any => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentFilter::Releases => "releases only",
            ContentFilter::Snapshots => "snapshots only",
            ContentFilter::Any => "releases and snapshots",
        }
    }
}

/// A subproject from `[modules.<name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleConfig {
    /// Directory relative to the root; defaults to the module key.
    #[serde(default)]
    pub path: Option<String>,
    /// Applied build plugins, e.g. `maven-publish`.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Published artifact id; defaults to `<project.name>_<module>`.
    #[serde(default)]
    pub artifact: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Dependencies exposed to consumers (POM scope `compile`).
    #[serde(default)]
    pub api: Vec<Coordinate>,
    /// Internal dependencies (POM scope `runtime`).
    #[serde(default)]
    pub implementation: Vec<Coordinate>,
}

impl Manifest {
    /// Load and parse a `Pubgate.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PubgateError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Pubgate.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            PubgateError::Manifest {
                message: format!("Failed to parse Pubgate.toml: {e}"),
            }
            .into()
        })
    }
}
