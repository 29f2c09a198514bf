//! Handler for `pubgate repos`.

use miette::Result;

use pubgate_core::project::Project;
use pubgate_ops::ops_repos::{read_repositories, repositories_for_version};
use pubgate_util::errors::PubgateError;

pub fn exec(version: Option<&str>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(PubgateError::Io)?;
    let project = Project::discover(&cwd)?;
    let repos = read_repositories(&project);

    let shown = match version {
        Some(v) => repositories_for_version(&repos, v),
        None => repos.iter().collect(),
    };

    for repo in shown {
        println!("{} = {} ({})", repo.name, repo.url, repo.content.label());
    }
    Ok(())
}
