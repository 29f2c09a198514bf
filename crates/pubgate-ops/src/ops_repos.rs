//! Operation: list dependency-read repositories.

use pubgate_core::project::Project;
use pubgate_maven::repository::MavenRepository;

/// Maven Central first, then every `[repositories]` entry in name order.
pub fn read_repositories(project: &Project) -> Vec<MavenRepository> {
    let mut repos = vec![MavenRepository::maven_central()];
    repos.extend(
        project
            .manifest
            .repositories
            .iter()
            .map(|(name, entry)| MavenRepository::from_entry(name, entry)),
    );
    repos
}

/// Repositories allowed to serve `version` under their content filters.
pub fn repositories_for_version<'a>(
    repos: &'a [MavenRepository],
    version: &str,
) -> Vec<&'a MavenRepository> {
    repos.iter().filter(|r| r.content.accepts(version)).collect()
}
