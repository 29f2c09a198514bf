//! The set of files published for one module.

use pubgate_core::coordinate::Coordinate;
use pubgate_core::project::Module;
use pubgate_util::errors::PubgateError;

use crate::pom;

/// One file in a publication, named per Maven layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Everything that gets published for one coordinate: jars plus the POM.
#[derive(Debug, Clone)]
pub struct Publication {
    pub coordinate: Coordinate,
    pub files: Vec<PublicationFile>,
}

impl Publication {
    /// Collect the built jars of `module` and render its POM.
    ///
    /// The main jar is required; `sources` and `javadoc` jars are attached
    /// only when present.
    pub fn for_module(module: &Module, description: Option<&str>) -> miette::Result<Self> {
        let coordinate = module.coordinate.clone();
        let main_jar = module.main_jar();
        if !main_jar.is_file() {
            return Err(PubgateError::Publish {
                message: format!(
                    "Module '{}' has no built jar at {}",
                    module.name,
                    main_jar.display()
                ),
            }
            .into());
        }

        let mut files = vec![PublicationFile {
            name: coordinate.file_name(None, "jar"),
            data: std::fs::read(&main_jar).map_err(PubgateError::Io)?,
        }];
        for (classifier, path) in module.attached_jars() {
            files.push(PublicationFile {
                name: coordinate.file_name(Some(&classifier), "jar"),
                data: std::fs::read(&path).map_err(PubgateError::Io)?,
            });
        }
        files.push(PublicationFile {
            name: coordinate.file_name(None, "pom"),
            data: pom::render_pom(module, description)?.into_bytes(),
        });

        Ok(Self { coordinate, files })
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}
