//! Operation: fail fast, plan, and publish every capable module.

use std::path::Path;
use std::time::Duration;

use pubgate_core::config::GlobalConfig;
use pubgate_core::project::Project;
use pubgate_maven::local::LocalRepository;
use pubgate_maven::publish::Publication;
use pubgate_maven::upload::RemotePublisher;
use pubgate_util::progress;

use crate::destination::{self, Destination};
use crate::ops_resolve;
use crate::plan::{self, PublicationPlan};

/// Options for [`publish`].
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// `-P KEY=VALUE` flags.
    pub properties: Vec<String>,
    /// Stop after planning.
    pub dry_run: bool,
}

/// Outcome of a publish run.
#[derive(Debug)]
pub enum PublishResult {
    /// `--dry-run`: nothing was written.
    Planned(PublicationPlan),
    /// Modules were published; `published` lists their coordinates.
    Published {
        plan: PublicationPlan,
        published: Vec<String>,
    },
}

/// Publish the project rooted at `project_root`.
///
/// A CI run without a remote target stops before the global config or the
/// manifest is read, and before any publication step.
pub async fn publish(project_root: &Path, opts: &PublishOptions) -> miette::Result<PublishResult> {
    let (config, resolution) = ops_resolve::resolve(Some(project_root), &opts.properties)?;
    destination::ensure_publishable(&resolution, &config)?;
    let global = GlobalConfig::load()?;
    let destination = destination::select_destination(
        &resolution,
        &config,
        &global.publish.local_repository_path(),
    )?;

    let project = Project::load(project_root)?;
    let plan = plan::plan_publications(&project, destination, plan::has_publish_capability);

    if opts.dry_run {
        return Ok(PublishResult::Planned(plan));
    }

    let description = project.manifest.project.description.as_deref();
    let mut published = Vec::new();

    match &plan.destination {
        Destination::Remote(repo) => {
            let publisher = RemotePublisher::new(
                repo.clone(),
                Duration::from_secs(global.publish.timeout_secs),
                global.publish.retries,
            )?;
            for module in plan.publishing() {
                let publication = Publication::for_module(module, description)?;
                let pb = progress::spinner(&format!(
                    "Uploading {} to {}",
                    publication.coordinate, repo.name
                ));
                let result = publisher.publish(&publication).await;
                pb.finish_and_clear();
                result?;
                progress::status(
                    "Uploaded",
                    &format!("{} to {}", publication.coordinate, repo.name),
                );
                published.push(publication.coordinate.to_string());
            }
        }
        Destination::Local { path, .. } => {
            let local = LocalRepository::new(path);
            for module in plan.publishing() {
                let publication = Publication::for_module(module, description)?;
                local.install(&publication)?;
                progress::status("Installed", &publication.coordinate.to_string());
                published.push(publication.coordinate.to_string());
            }
        }
    }

    for entry in plan.entries.iter().filter(|e| e.action == plan::PlannedAction::Skipped) {
        tracing::debug!("module '{}' has no publish capability", entry.module.name);
    }

    Ok(PublishResult::Published { plan, published })
}
