//! Handler for `pubgate resolve`.

use miette::Result;

use pubgate_util::errors::PubgateError;

use super::{project_root, yes_no};

pub fn exec(properties: &[String], json: bool) -> Result<()> {
    let root = project_root()?;
    let (_config, resolution) = pubgate_ops::ops_resolve::resolve(root.as_deref(), properties)?;

    if json {
        let out = serde_json::to_string_pretty(&resolution).map_err(|e| PubgateError::Generic {
            message: format!("Failed to serialize resolution: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    println!("repository name: {}", resolution.repository_name);
    println!("remote target:   {}", yes_no(resolution.has_remote_target));
    println!("CI run:          {}", yes_no(resolution.is_ci));
    println!("must abort:      {}", yes_no(resolution.must_abort));
    Ok(())
}
