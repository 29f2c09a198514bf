use std::path::{Path, PathBuf};

use pubgate_util::errors::PubgateError;
use pubgate_util::fs::find_ancestor_with;

use crate::coordinate::Coordinate;
use crate::manifest::Manifest;
use crate::MANIFEST_FILE;

/// Plugin id that gives a module publishing capability.
pub const MAVEN_PUBLISH: &str = "maven-publish";

/// Classifiers attached to the main jar when their files exist.
pub const ATTACHED_CLASSIFIERS: [&str; 2] = ["sources", "javadoc"];

/// A loaded build: the root manifest plus its directory.
#[derive(Debug, Clone)]
pub struct Project {
    pub manifest: Manifest,
    pub root_dir: PathBuf,
}

impl Project {
    /// Load the project whose `Pubgate.toml` lives in `root_dir`.
    pub fn load(root_dir: &Path) -> miette::Result<Self> {
        let manifest = Manifest::from_path(&root_dir.join(MANIFEST_FILE))?;
        Ok(Self {
            manifest,
            root_dir: root_dir.to_path_buf(),
        })
    }

    /// Walk up from `start` to the nearest `Pubgate.toml` and load it.
    pub fn discover(start: &Path) -> miette::Result<Self> {
        let root = find_ancestor_with(start, MANIFEST_FILE).ok_or_else(|| {
            PubgateError::Manifest {
                message: format!(
                    "Could not find {MANIFEST_FILE} in this directory or any parent"
                ),
            }
        })?;
        Self::load(&root)
    }

    pub fn name(&self) -> &str {
        &self.manifest.project.name
    }

    /// Shared build output root, `<root>/run/bld/gradle`. Each module builds
    /// into `<build_root>/<module>`.
    pub fn build_root(&self) -> PathBuf {
        self.root_dir.join("run").join("bld").join("gradle")
    }

    /// All subprojects with defaults applied, in name order.
    pub fn modules(&self) -> Vec<Module> {
        let project = &self.manifest.project;
        self.manifest
            .modules
            .iter()
            .map(|(name, cfg)| {
                let dir = self
                    .root_dir
                    .join(cfg.path.clone().unwrap_or_else(|| name.clone()));
                let coordinate = Coordinate::new(
                    cfg.group.clone().unwrap_or_else(|| project.group.clone()),
                    cfg.artifact
                        .clone()
                        .unwrap_or_else(|| format!("{}_{name}", project.name)),
                    cfg.version.clone().unwrap_or_else(|| project.version.clone()),
                );
                Module {
                    name: name.clone(),
                    dir,
                    build_dir: self.build_root().join(name),
                    coordinate,
                    plugins: cfg.plugins.clone(),
                    api: cfg.api.clone(),
                    implementation: cfg.implementation.clone(),
                }
            })
            .collect()
    }
}

/// A subproject with its effective publication coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub dir: PathBuf,
    pub build_dir: PathBuf,
    pub coordinate: Coordinate,
    pub plugins: Vec<String>,
    pub api: Vec<Coordinate>,
    pub implementation: Vec<Coordinate>,
}

impl Module {
    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p == id)
    }

    /// Directory holding built jars.
    pub fn libs_dir(&self) -> PathBuf {
        self.build_dir.join("libs")
    }

    /// Expected path of the main jar.
    pub fn main_jar(&self) -> PathBuf {
        self.libs_dir().join(self.coordinate.file_name(None, "jar"))
    }

    /// Classified jars (`sources`, `javadoc`) that exist on disk.
    pub fn attached_jars(&self) -> Vec<(String, PathBuf)> {
        ATTACHED_CLASSIFIERS
            .into_iter()
            .map(|c| {
                let path = self
                    .libs_dir()
                    .join(self.coordinate.file_name(Some(c), "jar"));
                (c.to_string(), path)
            })
            .filter(|(_, path)| path.is_file())
            .collect()
    }
}
