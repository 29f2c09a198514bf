use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use pubgate_util::errors::PubgateError;

/// A Maven coordinate `group:artifact:version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Whether this is a `-SNAPSHOT` version.
    pub fn is_snapshot(&self) -> bool {
        is_snapshot_version(&self.version)
    }

    /// Maven layout directory, e.g. `eu/algites/lib/common/pub.lib.java_common/1.0.0`.
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.group.replace('.', "/"),
            self.artifact,
            self.version
        )
    }

    /// Maven layout directory of the artifact (without version).
    pub fn artifact_path(&self) -> String {
        format!("{}/{}", self.group.replace('.', "/"), self.artifact)
    }

    /// File name for this coordinate with an optional classifier and extension.
    pub fn file_name(&self, classifier: Option<&str>, extension: &str) -> String {
        match classifier {
            Some(c) => format!("{}-{}-{c}.{extension}", self.artifact, self.version),
            None => format!("{}-{}.{extension}", self.artifact, self.version),
        }
    }
}

/// Whether `version` is a snapshot (`-SNAPSHOT` suffix).
pub fn is_snapshot_version(version: &str) -> bool {
    version.ends_with("-SNAPSHOT")
}

impl FromStr for Coordinate {
    type Err = PubgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [g, a, v] if !g.is_empty() && !a.is_empty() && !v.is_empty() => {
                Ok(Coordinate::new(*g, *a, *v))
            }
            _ => Err(PubgateError::Manifest {
                message: format!("Invalid coordinate '{s}', expected group:artifact:version"),
            }),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
