//! POM generation for published modules.

use quick_xml::events::BytesStart;

use pubgate_core::coordinate::Coordinate;
use pubgate_core::project::Module;

use crate::xml;

const POM_NS: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Render the POM for `module`.
///
/// `api` dependencies are exported with scope `compile` and
/// `implementation` dependencies with scope `runtime`.
pub fn render_pom(module: &Module, description: Option<&str>) -> miette::Result<String> {
    let c = &module.coordinate;
    let mut w = xml::writer();
    xml::declaration(&mut w)?;
    xml::start(
        &mut w,
        BytesStart::new("project").with_attributes([
            ("xmlns", POM_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", POM_SCHEMA),
        ]),
    )?;
    xml::text_element(&mut w, "modelVersion", "4.0.0")?;
    xml::text_element(&mut w, "groupId", &c.group)?;
    xml::text_element(&mut w, "artifactId", &c.artifact)?;
    xml::text_element(&mut w, "version", &c.version)?;
    xml::text_element(&mut w, "name", &module.name)?;
    if let Some(desc) = description {
        xml::text_element(&mut w, "description", desc)?;
    }

    if !module.api.is_empty() || !module.implementation.is_empty() {
        xml::open(&mut w, "dependencies")?;
        for dep in &module.api {
            write_dependency(&mut w, dep, "compile")?;
        }
        for dep in &module.implementation {
            write_dependency(&mut w, dep, "runtime")?;
        }
        xml::close(&mut w, "dependencies")?;
    }

    xml::close(&mut w, "project")?;
    xml::finish(w)
}

fn write_dependency(w: &mut xml::XmlWriter, dep: &Coordinate, scope: &str) -> miette::Result<()> {
    xml::open(w, "dependency")?;
    xml::text_element(w, "groupId", &dep.group)?;
    xml::text_element(w, "artifactId", &dep.artifact)?;
    xml::text_element(w, "version", &dep.version)?;
    xml::text_element(w, "scope", scope)?;
    xml::close(w, "dependency")
}
