// Shared helpers; not every test file uses every helper.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const OPTION_KEYS: [&str; 6] = [
    "ALGITES_VISIBILITY",
    "ALGITES_DIRECTION",
    "ALGITES_REPO_URL",
    "ALGITES_REPO_USER",
    "ALGITES_REPO_PASS",
    "CI",
];

pub const MANIFEST: &str = r#"
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

[modules.common]
plugins = ["java-library", "maven-publish"]
artifact = "pub.lib.java_common"

[modules.docs]
plugins = ["java-library"]
"#;

/// `pubgate` with an isolated HOME and none of the publication options inherited.
#[allow(deprecated)]
pub fn pubgate_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pubgate").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    for key in OPTION_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

/// Write the manifest and a built jar for `common`.
pub fn write_project(dir: &Path) {
    fs::write(dir.join("Pubgate.toml"), MANIFEST).unwrap();
    let libs = dir.join("run/bld/gradle/common/libs");
    fs::create_dir_all(&libs).unwrap();
    fs::write(libs.join("pub.lib.java_common-1.0.0.jar"), b"jar-bytes").unwrap();
}
