//! Installing publications into a local Maven repository (`~/.m2/repository`).

use std::fs;
use std::path::PathBuf;

use pubgate_core::coordinate::Coordinate;
use pubgate_util::errors::PubgateError;
use pubgate_util::fs::ensure_dir;

use crate::metadata::{self, MavenMetadata};
use crate::publish::Publication;

/// Metadata file written next to locally installed versions.
pub const LOCAL_METADATA_FILE: &str = "maven-metadata-local.xml";

/// A local Maven repository directory.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Version directory of a coordinate.
    pub fn artifact_dir(&self, coordinate: &Coordinate) -> PathBuf {
        self.root.join(coordinate.path())
    }

    /// Artifact-level `maven-metadata-local.xml`.
    pub fn metadata_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.root
            .join(coordinate.artifact_path())
            .join(LOCAL_METADATA_FILE)
    }

    /// Write every file of `publication` and record its version in the
    /// local metadata. Returns the version directory.
    pub fn install(&self, publication: &Publication) -> miette::Result<PathBuf> {
        let coordinate = &publication.coordinate;
        let dir = self.artifact_dir(coordinate);
        ensure_dir(&dir).map_err(|e| PubgateError::Publish {
            message: format!("Cannot create {}: {e}", dir.display()),
        })?;

        for file in &publication.files {
            let path = dir.join(&file.name);
            fs::write(&path, &file.data).map_err(PubgateError::Io)?;
            tracing::debug!("installed {}", path.display());
        }

        let meta_path = self.metadata_path(coordinate);
        let mut meta = if meta_path.is_file() {
            let existing = fs::read_to_string(&meta_path).map_err(PubgateError::Io)?;
            metadata::parse_metadata(&existing)?
        } else {
            MavenMetadata::new(coordinate)
        };
        meta.add_version(&coordinate.version, &metadata::timestamp_now());
        fs::write(&meta_path, meta.to_xml()?).map_err(PubgateError::Io)?;

        tracing::info!("installed {coordinate} into {}", self.root.display());
        Ok(dir)
    }
}
