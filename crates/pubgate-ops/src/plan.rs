//! Publication planning: which modules publish where.
//!
//! Planning is pure. The root project never publishes, and a module only
//! publishes when the caller's capability predicate accepts it.

use pubgate_core::project::{Module, Project, MAVEN_PUBLISH};

use crate::destination::Destination;

/// What happens to one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    Publish,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub module: Module,
    pub action: PlannedAction,
}

/// The full plan of one invocation.
#[derive(Debug, Clone)]
pub struct PublicationPlan {
    pub project: String,
    pub destination: Destination,
    pub entries: Vec<PlanEntry>,
}

impl PublicationPlan {
    /// Modules that will be published, in plan order.
    pub fn publishing(&self) -> impl Iterator<Item = &Module> {
        self.entries
            .iter()
            .filter(|e| e.action == PlannedAction::Publish)
            .map(|e| &e.module)
    }
}

/// Default capability check: the module applies `maven-publish`.
pub fn has_publish_capability(module: &Module) -> bool {
    module.has_plugin(MAVEN_PUBLISH)
}

/// Plan every subproject of `project` against `destination`.
pub fn plan_publications<F>(project: &Project, destination: Destination, capable: F) -> PublicationPlan
where
    F: Fn(&Module) -> bool,
{
    let entries = project
        .modules()
        .into_iter()
        .map(|module| {
            let action = if capable(&module) {
                PlannedAction::Publish
            } else {
                PlannedAction::Skipped
            };
            PlanEntry { module, action }
        })
        .collect();

    PublicationPlan {
        project: project.name().to_string(),
        destination,
        entries,
    }
}
