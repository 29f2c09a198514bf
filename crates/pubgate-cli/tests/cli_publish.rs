mod common;

use common::{pubgate_cmd, write_project};
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const AUTH: &str = "Basic ZGVwbG95ZXI6czNjcmV0";
const BASE: &str = "/maven/eu/algites/lib/common/pub.lib.java_common";

#[test]
fn test_publish_ci_without_remote_aborts() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .env("CI", "true")
        .args(["publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CI build requires"))
        .stderr(predicate::str::contains("ALGITES_REPO_URL"));

    assert!(!home.path().join(".m2").exists());
}

#[test]
fn test_publish_ci_with_partial_credentials_aborts() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .env("CI", "true")
        .env("ALGITES_REPO_URL", "https://repo.example.com/maven")
        .env("ALGITES_REPO_USER", "deployer")
        .args(["publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ALGITES_REPO_PASS"));
}

#[test]
fn test_publish_ci_abort_precedes_manifest() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .env("CI", "true")
        .args(["publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CI build requires"));
}

#[test]
fn test_publish_ci_abort_precedes_global_config() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());
    std::fs::create_dir_all(home.path().join(".pubgate")).unwrap();
    std::fs::write(home.path().join(".pubgate/config.toml"), "[publish\nretries = ").unwrap();

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .env("CI", "true")
        .args(["publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CI build requires"));
}

#[test]
fn test_publish_without_ci_installs_locally() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .args(["publish"])
        .assert()
        .success()
        .stderr(predicate::str::contains("algitesPubUpload"));

    let dir = home
        .path()
        .join(".m2/repository/eu/algites/lib/common/pub.lib.java_common");
    assert!(dir.join("1.0.0/pub.lib.java_common-1.0.0.jar").exists());
    assert!(dir.join("1.0.0/pub.lib.java_common-1.0.0.pom").exists());
    assert!(dir.join("maven-metadata-local.xml").exists());

    // docs does not apply maven-publish
    assert!(!home
        .path()
        .join(".m2/repository/eu/algites/lib/common/pub.lib.Java_docs")
        .exists());
}

#[test]
fn test_publish_ci_with_credentials_uploads() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());

    let server = MockServer::start();
    let mut puts = Vec::new();
    for file in [
        "1.0.0/pub.lib.java_common-1.0.0.jar",
        "1.0.0/pub.lib.java_common-1.0.0.pom",
        "maven-metadata.xml",
    ] {
        let path = format!("{BASE}/{file}");
        for suffix in ["", ".md5", ".sha1", ".sha256", ".sha512"] {
            let full = format!("{path}{suffix}");
            puts.push(server.mock(|when, then| {
                when.method(PUT).path(full.as_str()).header("Authorization", AUTH);
                then.status(201);
            }));
        }
    }
    let metadata = server.mock(|when, then| {
        when.method(GET).path(format!("{BASE}/maven-metadata.xml"));
        then.status(404);
    });

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .env("CI", "true")
        .env("ALGITES_REPO_URL", server.url("/maven"))
        .env("ALGITES_REPO_USER", "deployer")
        .env("ALGITES_REPO_PASS", "s3cret")
        .args(["publish"])
        .assert()
        .success();

    metadata.assert();
    for mock in &puts {
        mock.assert();
    }
    assert!(!home.path().join(".m2").exists());
}

#[test]
fn test_publish_dry_run_prints_plan() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .args(["publish", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Publication plan for pub.lib.Java"))
        .stdout(predicate::str::contains(
            "pub.lib.Java: publishing disabled (root project)",
        ))
        .stdout(predicate::str::contains(
            "common: eu.algites.lib.common:pub.lib.java_common:1.0.0 publish",
        ))
        .stdout(predicate::str::contains("docs: "))
        .stdout(predicate::str::contains("skipped (no maven-publish)"));

    assert!(!home.path().join(".m2").exists());
}

#[test]
fn test_publish_missing_jar_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_project(work.path());
    std::fs::remove_dir_all(work.path().join("run")).unwrap();

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .args(["publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Publish failed"));
}

#[test]
fn test_publish_without_manifest_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    pubgate_cmd(home.path())
        .current_dir(work.path())
        .args(["publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pubgate.toml"));
}
