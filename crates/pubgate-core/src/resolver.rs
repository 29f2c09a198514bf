//! Publication target resolution.
//!
//! [`resolve`] turns a [`ConfigInput`] into a [`Resolution`]: whether a remote
//! target is configured, the repository name to register it under, whether
//! this is a CI run, and whether the invocation has to abort. It is pure and
//! never fails; acting on `must_abort` is the caller's job.

use serde::Serialize;

use crate::options::{ConfigInput, ConfigOption};

/// Fixed prefix of every derived repository name.
pub const PRODUCT_TAG: &str = "algites";

/// Visibility used when `ALGITES_VISIBILITY` is absent.
pub const DEFAULT_VISIBILITY: &str = "pub";

/// Direction used when `ALGITES_DIRECTION` is absent.
pub const DEFAULT_DIRECTION: &str = "upload";

/// Outcome of resolving one invocation's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub has_remote_target: bool,
    pub repository_name: String,
    pub is_ci: bool,
    pub must_abort: bool,
}

/// Resolve the publication target for `config`.
pub fn resolve(config: &ConfigInput) -> Resolution {
    let visibility = config
        .get(ConfigOption::Visibility)
        .unwrap_or(DEFAULT_VISIBILITY);
    let direction = config
        .get(ConfigOption::Direction)
        .unwrap_or(DEFAULT_DIRECTION);

    let has_remote_target = ConfigOption::REMOTE.iter().all(|o| config.is_set(*o));
    if !has_remote_target && ConfigOption::REMOTE.iter().any(|o| config.is_set(*o)) {
        tracing::debug!(
            "partial remote configuration (missing {:?}), treating as no remote target",
            config.missing_remote_options()
        );
    }

    let is_ci = is_ci_flag(config.get(ConfigOption::CiFlag));

    Resolution {
        has_remote_target,
        repository_name: repository_name(visibility, direction),
        is_ci,
        must_abort: is_ci && !has_remote_target,
    }
}

/// `true` only for the exact string `"true"`.
pub fn is_ci_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// `algites` + `Visibility` + `Direction`, e.g. `algitesPubUpload`.
pub fn repository_name(visibility: &str, direction: &str) -> String {
    let mut name = String::from(PRODUCT_TAG);
    name.push_str(&cap_first(visibility));
    name.push_str(&cap_first(direction));
    name
}

/// Uppercase the first character if it is lowercase; leave the rest untouched.
/// Uses `to_uppercase`, not titlecase: `ǆ` becomes `Ǆ` and `ß` becomes `SS`.
pub fn cap_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_first_lowercase_initial() {
        assert_eq!(cap_first("pub"), "Pub");
    }

    #[test]
    fn cap_first_keeps_rest_untouched() {
        assert_eq!(cap_first("sNAPshot"), "SNAPshot");
    }

    #[test]
    fn cap_first_already_upper() {
        assert_eq!(cap_first("Priv"), "Priv");
    }

    #[test]
    fn cap_first_non_letter_initial() {
        assert_eq!(cap_first("2fa"), "2fa");
    }

    #[test]
    fn cap_first_empty() {
        assert_eq!(cap_first(""), "");
    }

    #[test]
    fn cap_first_uppercases_rather_than_titlecases() {
        assert_eq!(cap_first("ßig"), "SSig");
        assert_eq!(cap_first("ǆx"), "Ǆx");
    }

    #[test]
    fn cap_first_non_ascii() {
        assert_eq!(cap_first("élan"), "Élan");
    }
}
