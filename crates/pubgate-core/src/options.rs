//! Configuration input: the six publication options and their layering.
//!
//! Every option is looked up independently, first in the invocation-time
//! properties and then in the process environment. Absent options stay
//! absent here; defaults are applied by the resolver.

use std::collections::BTreeMap;
use std::fmt;

/// A recognized publication option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigOption {
    Visibility,
    Direction,
    RepoUrl,
    RepoUser,
    RepoPass,
    CiFlag,
}

impl ConfigOption {
    /// All options in display order.
    pub const ALL: [ConfigOption; 6] = [
        ConfigOption::Visibility,
        ConfigOption::Direction,
        ConfigOption::RepoUrl,
        ConfigOption::RepoUser,
        ConfigOption::RepoPass,
        ConfigOption::CiFlag,
    ];

    /// The three options that together make up a remote publication target.
    pub const REMOTE: [ConfigOption; 3] = [
        ConfigOption::RepoUrl,
        ConfigOption::RepoUser,
        ConfigOption::RepoPass,
    ];

    /// Property and environment variable name for this option.
    pub fn key(self) -> &'static str {
        match self {
            ConfigOption::Visibility => "ALGITES_VISIBILITY",
            ConfigOption::Direction => "ALGITES_DIRECTION",
            ConfigOption::RepoUrl => "ALGITES_REPO_URL",
            ConfigOption::RepoUser => "ALGITES_REPO_USER",
            ConfigOption::RepoPass => "ALGITES_REPO_PASS",
            ConfigOption::CiFlag => "CI",
        }
    }

    /// Whether the value must be masked when displayed.
    pub fn is_secret(self) -> bool {
        matches!(self, ConfigOption::RepoPass)
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which layer supplied an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Invocation-time property (`-P`, `pubgate.properties`).
    Property,
    /// Process environment variable.
    Env,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Property => f.write_str("property"),
            Source::Env => f.write_str("env"),
        }
    }
}

/// A value together with the layer it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced {
    pub value: String,
    pub source: Source,
}

/// Flat mapping from option to optional string value.
///
/// An empty string is a present value; only a missing key is "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigInput {
    values: BTreeMap<ConfigOption, Sourced>,
}

impl ConfigInput {
    /// Layer `properties` over an environment lookup function.
    pub fn from_layers<F>(properties: &BTreeMap<String, String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = BTreeMap::new();
        for option in ConfigOption::ALL {
            let key = option.key();
            let found = if let Some(value) = properties.get(key) {
                Some(Sourced {
                    value: value.clone(),
                    source: Source::Property,
                })
            } else {
                env(key).map(|value| Sourced {
                    value,
                    source: Source::Env,
                })
            };
            if let Some(sourced) = found {
                values.insert(option, sourced);
            }
        }
        Self { values }
    }

    /// Layer `properties` over the current process environment.
    pub fn from_process(properties: &BTreeMap<String, String>) -> Self {
        Self::from_layers(properties, |key| std::env::var(key).ok())
    }

    /// Set an option directly (treated as a property).
    pub fn with(mut self, option: ConfigOption, value: impl Into<String>) -> Self {
        self.values.insert(
            option,
            Sourced {
                value: value.into(),
                source: Source::Property,
            },
        );
        self
    }

    /// The value of `option`, if present in any layer.
    pub fn get(&self, option: ConfigOption) -> Option<&str> {
        self.values.get(&option).map(|s| s.value.as_str())
    }

    /// The value and originating layer of `option`.
    pub fn sourced(&self, option: ConfigOption) -> Option<&Sourced> {
        self.values.get(&option)
    }

    pub fn is_set(&self, option: ConfigOption) -> bool {
        self.values.contains_key(&option)
    }

    /// Remote-target options that are absent, in declaration order.
    pub fn missing_remote_options(&self) -> Vec<ConfigOption> {
        ConfigOption::REMOTE
            .into_iter()
            .filter(|o| !self.is_set(*o))
            .collect()
    }
}
