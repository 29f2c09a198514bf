//! Artifact-level `maven-metadata.xml`: parsing, version merging, rendering.

use quick_xml::events::Event;
use quick_xml::Reader;

use pubgate_core::coordinate::{is_snapshot_version, Coordinate};
use pubgate_util::errors::PubgateError;

use crate::xml;

/// Artifact-level Maven metadata listing published versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MavenMetadata {
    pub group_id: String,
    pub artifact_id: String,
    pub latest: Option<String>,
    pub release: Option<String>,
    pub versions: Vec<String>,
    pub last_updated: Option<String>,
}

impl MavenMetadata {
    /// Empty metadata for a coordinate's artifact.
    pub fn new(coordinate: &Coordinate) -> Self {
        Self {
            group_id: coordinate.group.clone(),
            artifact_id: coordinate.artifact.clone(),
            ..Self::default()
        }
    }

    /// Record `version` as published at `timestamp` (`yyyyMMddHHmmss`).
    ///
    /// The version is appended once; `latest` always moves to it and
    /// `release` only for non-snapshot versions.
    pub fn add_version(&mut self, version: &str, timestamp: &str) {
        if !self.versions.iter().any(|v| v == version) {
            self.versions.push(version.to_string());
        }
        self.latest = Some(version.to_string());
        if !is_snapshot_version(version) {
            self.release = Some(version.to_string());
        }
        self.last_updated = Some(timestamp.to_string());
    }

    pub fn to_xml(&self) -> miette::Result<String> {
        let mut w = xml::writer();
        xml::declaration(&mut w)?;
        xml::open(&mut w, "metadata")?;
        xml::text_element(&mut w, "groupId", &self.group_id)?;
        xml::text_element(&mut w, "artifactId", &self.artifact_id)?;
        xml::open(&mut w, "versioning")?;
        if let Some(latest) = &self.latest {
            xml::text_element(&mut w, "latest", latest)?;
        }
        if let Some(release) = &self.release {
            xml::text_element(&mut w, "release", release)?;
        }
        xml::open(&mut w, "versions")?;
        for version in &self.versions {
            xml::text_element(&mut w, "version", version)?;
        }
        xml::close(&mut w, "versions")?;
        if let Some(updated) = &self.last_updated {
            xml::text_element(&mut w, "lastUpdated", updated)?;
        }
        xml::close(&mut w, "versioning")?;
        xml::close(&mut w, "metadata")?;
        xml::finish(w)
    }
}

/// Current UTC time in the `lastUpdated` format.
pub fn timestamp_now() -> String {
    chrono::Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Parse an artifact-level `maven-metadata.xml`.
pub fn parse_metadata(xml: &str) -> miette::Result<MavenMetadata> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut meta = MavenMetadata::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                match path.join(">").as_str() {
                    "metadata>groupId" => meta.group_id = text_buf.clone(),
                    "metadata>artifactId" => meta.artifact_id = text_buf.clone(),
                    "metadata>versioning>latest" => meta.latest = Some(text_buf.clone()),
                    "metadata>versioning>release" => meta.release = Some(text_buf.clone()),
                    "metadata>versioning>lastUpdated" => {
                        meta.last_updated = Some(text_buf.clone());
                    }
                    "metadata>versioning>versions>version" => {
                        meta.versions.push(text_buf.clone());
                    }
                    _ => {}
                }
                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PubgateError::Generic {
                    message: format!("Failed to parse maven-metadata.xml: {e}"),
                }
                .into());
            }
            _ => {}
        }
    }

    Ok(meta)
}
