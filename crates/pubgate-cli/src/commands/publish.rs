//! Handler for `pubgate publish`.

use miette::Result;

use pubgate_ops::ops_publish::{self, PublishOptions, PublishResult};
use pubgate_ops::plan::{PlannedAction, PublicationPlan};
use pubgate_util::errors::PubgateError;
use pubgate_util::progress;

use super::project_root;

pub fn exec(properties: &[String], dry_run: bool) -> Result<()> {
    let root = match project_root()? {
        Some(root) => root,
        None => std::env::current_dir().map_err(PubgateError::Io)?,
    };

    tracing::debug!("publishing from {}", root.display());
    let opts = PublishOptions {
        properties: properties.to_vec(),
        dry_run,
    };

    let rt = tokio::runtime::Runtime::new().map_err(|e| PubgateError::Generic {
        message: format!("Failed to start async runtime: {e}"),
    })?;

    match rt.block_on(ops_publish::publish(&root, &opts))? {
        PublishResult::Planned(plan) => print_plan(&plan),
        PublishResult::Published { plan, published } => {
            if published.is_empty() {
                progress::status_warn("Finished", "no module applies maven-publish");
            } else {
                progress::status(
                    "Finished",
                    &format!(
                        "published {} module(s) to {}",
                        published.len(),
                        plan.destination.describe()
                    ),
                );
            }
        }
    }
    Ok(())
}

fn print_plan(plan: &PublicationPlan) {
    println!("Publication plan for {}", plan.project);
    println!("  destination: {}", plan.destination.describe());
    println!("  {}: publishing disabled (root project)", plan.project);
    for entry in &plan.entries {
        let action = match entry.action {
            PlannedAction::Publish => "publish",
            PlannedAction::Skipped => "skipped (no maven-publish)",
        };
        println!(
            "  {}: {} {action}",
            entry.module.name, entry.module.coordinate
        );
    }
}
