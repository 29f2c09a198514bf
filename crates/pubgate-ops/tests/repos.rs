use std::fs;

use pubgate_core::manifest::ContentFilter;
use pubgate_core::project::Project;
use pubgate_ops::ops_repos::{read_repositories, repositories_for_version};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[project]
name = "pub.lib.Java"
group = "eu.algites.lib.common"
version = "1.0.0"

[repositories.algites-public-releases]
url = "https://repo1.maven.org/maven2"
content = "releases"

[repositories.algites-public-snapshots]
url = "https://dl.cloudsmith.io/public/algites/maven-snapshots-pub/"
content = "snapshots"
"#;

fn project() -> (TempDir, Project) {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Pubgate.toml"), MANIFEST).unwrap();
    let project = Project::load(tmp.path()).unwrap();
    (tmp, project)
}

#[test]
fn central_first_then_declared() {
    let (_tmp, project) = project();
    let repos = read_repositories(&project);
    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "maven-central",
            "algites-public-releases",
            "algites-public-snapshots"
        ]
    );
    assert_eq!(repos[2].content, ContentFilter::Snapshots);
}

#[test]
fn snapshot_versions_skip_release_only_repos() {
    let (_tmp, project) = project();
    let repos = read_repositories(&project);

    let snapshot: Vec<&str> = repositories_for_version(&repos, "1.1.0-SNAPSHOT")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(snapshot, vec!["maven-central", "algites-public-snapshots"]);

    let release: Vec<&str> = repositories_for_version(&repos, "1.0.0")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(release, vec!["maven-central", "algites-public-releases"]);
}
