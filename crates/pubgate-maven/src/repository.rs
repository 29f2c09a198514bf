//! Maven repository abstraction: URL layout, credentials, content filters.

use pubgate_core::coordinate::Coordinate;
use pubgate_core::manifest::{ContentFilter, RepositoryEntry};

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// File name of the artifact-level metadata on a remote repository.
pub const METADATA_FILE: &str = "maven-metadata.xml";

/// A configured Maven repository with optional credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenRepository {
    pub name: String,
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub content: ContentFilter,
}

impl MavenRepository {
    /// Build a read repository from a name and a manifest `RepositoryEntry`.
    pub fn from_entry(name: &str, entry: &RepositoryEntry) -> Self {
        Self {
            name: name.to_string(),
            url: entry.url().trim_end_matches('/').to_string(),
            username: None,
            password: None,
            content: entry.content(),
        }
    }

    /// A credentialed publication target.
    pub fn remote(name: &str, url: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.trim_end_matches('/').to_string(),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            content: ContentFilter::Any,
        }
    }

    /// Construct the default Maven Central repository.
    pub fn maven_central() -> Self {
        Self {
            name: "maven-central".to_string(),
            url: MAVEN_CENTRAL_URL.to_string(),
            username: None,
            password: None,
            content: ContentFilter::Any,
        }
    }

    /// Full URL to a specific file within the coordinate's version directory.
    pub fn file_url(&self, coordinate: &Coordinate, filename: &str) -> String {
        format!("{}/{}/{}", self.url, coordinate.path(), filename)
    }

    /// URL to the artifact-level `maven-metadata.xml`.
    pub fn metadata_url(&self, coordinate: &Coordinate) -> String {
        format!(
            "{}/{}/{METADATA_FILE}",
            self.url,
            coordinate.artifact_path()
        )
    }

    /// Whether this repository has authentication configured.
    pub fn has_auth(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate() -> Coordinate {
        Coordinate::new("eu.algites.lib.common", "pub.lib.java_common", "1.0.0")
    }

    #[test]
    fn file_url_format() {
        let repo = MavenRepository::remote("algitesPubUpload", "https://repo.example.com/maven/", "u", "p");
        assert_eq!(
            repo.file_url(&coordinate(), "pub.lib.java_common-1.0.0.jar"),
            "https://repo.example.com/maven/eu/algites/lib/common/pub.lib.java_common/1.0.0/pub.lib.java_common-1.0.0.jar"
        );
    }

    #[test]
    fn metadata_url_format() {
        let repo = MavenRepository::maven_central();
        assert_eq!(
            repo.metadata_url(&coordinate()),
            "https://repo.maven.apache.org/maven2/eu/algites/lib/common/pub.lib.java_common/maven-metadata.xml"
        );
    }

    #[test]
    fn from_entry_url() {
        let entry = RepositoryEntry::Url("https://repo.example.com/maven/".to_string());
        let repo = MavenRepository::from_entry("test", &entry);
        assert_eq!(repo.url, "https://repo.example.com/maven");
        assert_eq!(repo.content, ContentFilter::Any);
        assert!(!repo.has_auth());
    }

    #[test]
    fn from_entry_detailed_keeps_filter() {
        let entry = RepositoryEntry::Detailed {
            url: "https://dl.cloudsmith.io/public/algites/maven-snapshots-pub/".to_string(),
            content: ContentFilter::Snapshots,
        };
        let repo = MavenRepository::from_entry("algites-public-snapshots", &entry);
        assert_eq!(repo.content, ContentFilter::Snapshots);
        assert!(repo.url.ends_with("maven-snapshots-pub"));
    }

    #[test]
    fn remote_has_auth() {
        let repo = MavenRepository::remote("algitesPubUpload", "https://x", "deployer", "s3cret");
        assert!(repo.has_auth());
        assert_eq!(repo.username.as_deref(), Some("deployer"));
    }
}
