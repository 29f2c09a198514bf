//! Command dispatch and handler modules.

mod env;
mod publish;
mod repos;
mod resolve;

use std::path::PathBuf;

use miette::Result;

use pubgate_core::MANIFEST_FILE;
use pubgate_util::errors::PubgateError;
use pubgate_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve { json } => resolve::exec(&cli.properties, json),
        Command::Publish { dry_run } => publish::exec(&cli.properties, dry_run),
        Command::Repos { version } => repos::exec(version.as_deref()),
        Command::Env { reveal } => env::exec(&cli.properties, reveal),
    }
}

/// The directory holding the nearest `Pubgate.toml`, if any.
fn project_root() -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().map_err(PubgateError::Io)?;
    Ok(find_ancestor_with(&cwd, MANIFEST_FILE))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
