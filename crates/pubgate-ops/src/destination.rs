//! Choosing the single publication destination of an invocation.

use std::path::{Path, PathBuf};

use pubgate_core::options::{ConfigInput, ConfigOption};
use pubgate_core::resolver::Resolution;
use pubgate_maven::repository::MavenRepository;
use pubgate_util::errors::PubgateError;
use pubgate_util::progress;

/// Where every capable module of this invocation publishes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The one registered remote repository, named by the resolution.
    Remote(MavenRepository),
    /// Local-only fallback. Keeps the remote name for reporting.
    Local {
        path: PathBuf,
        would_be_repository: String,
    },
}

impl Destination {
    pub fn describe(&self) -> String {
        match self {
            Destination::Remote(repo) => format!("{} ({})", repo.name, repo.url),
            Destination::Local { path, .. } => format!("local repository {}", path.display()),
        }
    }
}

/// Fail with `MissingRequiredConfiguration`, naming the absent remote
/// options, exactly when `must_abort` is set.
pub fn ensure_publishable(resolution: &Resolution, config: &ConfigInput) -> miette::Result<()> {
    if resolution.must_abort {
        let missing = config
            .missing_remote_options()
            .into_iter()
            .map(|o| o.key().to_string())
            .collect();
        return Err(PubgateError::MissingRequiredConfiguration { missing }.into());
    }
    Ok(())
}

/// Act on `resolution`: abort, register the remote target, or fall back to
/// the local repository at `local_root`.
pub fn select_destination(
    resolution: &Resolution,
    config: &ConfigInput,
    local_root: &Path,
) -> miette::Result<Destination> {
    ensure_publishable(resolution, config)?;

    if resolution.has_remote_target {
        let (Some(url), Some(user), Some(pass)) = (
            config.get(ConfigOption::RepoUrl),
            config.get(ConfigOption::RepoUser),
            config.get(ConfigOption::RepoPass),
        ) else {
            return Err(PubgateError::Generic {
                message: "remote target resolved without credentials".to_string(),
            }
            .into());
        };
        return Ok(Destination::Remote(MavenRepository::remote(
            &resolution.repository_name,
            url,
            user,
            pass,
        )));
    }

    tracing::info!(
        "no remote publication target; repository '{}' would have been used",
        resolution.repository_name
    );
    progress::status_info(
        "Local",
        &format!(
            "no remote target configured ({} would be used), publishing to {}",
            resolution.repository_name,
            local_root.display()
        ),
    );
    Ok(Destination::Local {
        path: local_root.to_path_buf(),
        would_be_repository: resolution.repository_name.clone(),
    })
}
