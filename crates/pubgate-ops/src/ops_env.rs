//! Operation: report every option, its value and the layer it came from.

use pubgate_core::options::{ConfigInput, ConfigOption};
use pubgate_core::resolver::{DEFAULT_DIRECTION, DEFAULT_VISIBILITY};

/// One line of the `env` report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: &'static str,
    pub value: Option<String>,
    /// `property`, `env`, `default` or `unset`.
    pub origin: String,
}

/// Describe all options; secrets are masked unless `reveal` is set.
pub fn describe(config: &ConfigInput, reveal: bool) -> Vec<EnvEntry> {
    ConfigOption::ALL
        .into_iter()
        .map(|option| {
            let (value, origin) = match config.sourced(option) {
                Some(s) if option.is_secret() && !reveal => {
                    (Some("********".to_string()), s.source.to_string())
                }
                Some(s) => (Some(s.value.clone()), s.source.to_string()),
                None => match default_for(option) {
                    Some(d) => (Some(d.to_string()), "default".to_string()),
                    None => (None, "unset".to_string()),
                },
            };
            EnvEntry {
                key: option.key(),
                value,
                origin,
            }
        })
        .collect()
}

fn default_for(option: ConfigOption) -> Option<&'static str> {
    match option {
        ConfigOption::Visibility => Some(DEFAULT_VISIBILITY),
        ConfigOption::Direction => Some(DEFAULT_DIRECTION),
        _ => None,
    }
}
