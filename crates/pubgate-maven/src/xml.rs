//! Small quick-xml writing helpers shared by POM and metadata rendering.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use pubgate_util::errors::PubgateError;

pub(crate) type XmlWriter = Writer<Vec<u8>>;

pub(crate) fn writer() -> XmlWriter {
    Writer::new_with_indent(Vec::new(), b' ', 2)
}

fn xml_err(e: impl std::fmt::Display) -> PubgateError {
    PubgateError::Generic {
        message: format!("Failed to write XML: {e}"),
    }
}

pub(crate) fn declaration(w: &mut XmlWriter) -> miette::Result<()> {
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;
    Ok(())
}

pub(crate) fn start(w: &mut XmlWriter, tag: BytesStart<'_>) -> miette::Result<()> {
    w.write_event(Event::Start(tag)).map_err(xml_err)?;
    Ok(())
}

pub(crate) fn open(w: &mut XmlWriter, name: &str) -> miette::Result<()> {
    start(w, BytesStart::new(name))
}

pub(crate) fn close(w: &mut XmlWriter, name: &str) -> miette::Result<()> {
    w.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)?;
    Ok(())
}

/// `<name>value</name>`, escaping `value`.
pub(crate) fn text_element(w: &mut XmlWriter, name: &str, value: &str) -> miette::Result<()> {
    open(w, name)?;
    w.write_event(Event::Text(BytesText::new(value)))
        .map_err(xml_err)?;
    close(w, name)
}

pub(crate) fn finish(w: XmlWriter) -> miette::Result<String> {
    let mut out = String::from_utf8(w.into_inner()).map_err(xml_err)?;
    out.push('\n');
    Ok(out)
}
