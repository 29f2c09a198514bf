//! Operation: gather the configuration input and resolve it.

use std::path::Path;

use pubgate_core::config::dirs_path;
use pubgate_core::options::ConfigInput;
use pubgate_core::properties::invocation_properties;
use pubgate_core::resolver::{self, Resolution};

/// Build the configuration input for this invocation.
///
/// Properties come from `~/.pubgate/pubgate.properties`, the project's
/// `pubgate.properties` (when `project_root` is known), and `-P` flags; the
/// process environment is the fallback layer.
pub fn gather_config(project_root: Option<&Path>, flags: &[String]) -> miette::Result<ConfigInput> {
    let properties = invocation_properties(&dirs_path(), project_root, flags)?;
    Ok(ConfigInput::from_process(&properties))
}

/// Gather and resolve in one step.
pub fn resolve(
    project_root: Option<&Path>,
    flags: &[String],
) -> miette::Result<(ConfigInput, Resolution)> {
    let config = gather_config(project_root, flags)?;
    let resolution = resolver::resolve(&config);
    tracing::debug!(?resolution, "resolved publication target");
    Ok((config, resolution))
}
