//! Handler for `pubgate env`.

use miette::Result;

use pubgate_ops::ops_env::describe;
use pubgate_ops::ops_resolve::gather_config;

use super::project_root;

pub fn exec(properties: &[String], reveal: bool) -> Result<()> {
    let root = project_root()?;
    let config = gather_config(root.as_deref(), properties)?;

    for entry in describe(&config, reveal) {
        match entry.value {
            Some(value) => println!("  {} = {} ({})", entry.key, value, entry.origin),
            None => println!("  {} ({})", entry.key, entry.origin),
        }
    }
    Ok(())
}
