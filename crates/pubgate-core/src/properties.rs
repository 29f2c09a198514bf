use std::collections::BTreeMap;
use std::path::Path;

use pubgate_util::errors::PubgateError;

/// File name of the project-level and user-level properties files.
pub const PROPERTIES_FILE: &str = "pubgate.properties";

/// Loads a properties file (`KEY=value` lines, `#` comments).
///
/// A missing file yields an empty map. Keys and values are trimmed; a line
/// without `=` is ignored.
pub fn load_properties_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(PubgateError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Parse a `-P KEY=VALUE` flag. The value may be empty; the key may not.
pub fn parse_property_flag(flag: &str) -> miette::Result<(String, String)> {
    let Some((key, value)) = flag.split_once('=') else {
        return Err(PubgateError::Config {
            message: format!("Invalid property '{flag}', expected KEY=VALUE"),
        }
        .into());
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(PubgateError::Config {
            message: format!("Invalid property '{flag}', key is empty"),
        }
        .into());
    }
    Ok((key.to_string(), value.to_string()))
}

/// Merge invocation-time properties, highest precedence last:
/// `<project>/pubgate.properties`, `~/.pubgate/pubgate.properties`, then `-P` flags.
/// The operator's own file overrides values committed with the project.
pub fn invocation_properties(
    user_dir: &Path,
    project_root: Option<&Path>,
    flags: &[String],
) -> miette::Result<BTreeMap<String, String>> {
    let mut merged = match project_root {
        Some(root) => load_properties_file(&root.join(PROPERTIES_FILE))?,
        None => BTreeMap::new(),
    };
    merged.extend(load_properties_file(&user_dir.join(PROPERTIES_FILE))?);
    for flag in flags {
        let (key, value) = parse_property_flag(flag)?;
        merged.insert(key, value);
    }
    Ok(merged)
}
