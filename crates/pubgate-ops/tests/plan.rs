use std::fs;

use pubgate_core::project::Project;
use pubgate_ops::destination::Destination;
use pubgate_ops::plan::{has_publish_capability, plan_publications, PlannedAction};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[project]
name = "pub.lib.Java"
group = "eu.algites.lib.common"
version = "1.0.0"

[modules.common]
plugins = ["java-library", "maven-publish"]

[modules.docs]
plugins = ["java-library"]

[modules.version]
path = "util/version"
plugins = ["maven-publish", "java-gradle-plugin"]
"#;

fn project() -> (TempDir, Project) {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Pubgate.toml"), MANIFEST).unwrap();
    let project = Project::load(tmp.path()).unwrap();
    (tmp, project)
}

fn local() -> Destination {
    Destination::Local {
        path: "/tmp/m2".into(),
        would_be_repository: "algitesPubUpload".to_string(),
    }
}

#[test]
fn capable_modules_publish_others_skip() {
    let (_tmp, project) = project();
    let plan = plan_publications(&project, local(), has_publish_capability);

    let actions: Vec<(&str, &PlannedAction)> = plan
        .entries
        .iter()
        .map(|e| (e.module.name.as_str(), &e.action))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("common", &PlannedAction::Publish),
            ("docs", &PlannedAction::Skipped),
            ("version", &PlannedAction::Publish),
        ]
    );
}

#[test]
fn root_project_is_never_planned() {
    let (_tmp, project) = project();
    let plan = plan_publications(&project, local(), |_| true);
    assert_eq!(plan.project, "pub.lib.Java");
    assert!(plan.entries.iter().all(|e| e.module.name != "pub.lib.Java"));
    assert_eq!(plan.entries.len(), 3);
}

#[test]
fn caller_supplies_capability_predicate() {
    let (_tmp, project) = project();
    let plan = plan_publications(&project, local(), |m| m.name == "docs");
    let publishing: Vec<&str> = plan.publishing().map(|m| m.name.as_str()).collect();
    assert_eq!(publishing, vec!["docs"]);
}

#[test]
fn plan_carries_destination() {
    let (_tmp, project) = project();
    let plan = plan_publications(&project, local(), has_publish_capability);
    assert_eq!(plan.destination, local());
}
