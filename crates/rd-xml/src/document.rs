//! Reading and writing XML text.
//!
//! Comments, processing instructions and the declaration are skipped on
//! read. Whitespace-only text between elements is dropped.

use crate::node::XmlNode;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use rd_core::errors::{Error, Result};
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

/// A parsed document: one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlNode,
}

impl XmlDocument {
    /// A document rooted at `root`.
    pub fn new(root: XmlNode) -> Self {
        Self { root }
    }

    /// The root element.
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Consume the document, returning its root.
    pub fn into_root(self) -> XmlNode {
        self.root
    }

    /// Serialize with a declaration and two-space indentation.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_err)?;
        write_node(&mut writer, &self.root)?;
        String::from_utf8(writer.into_inner()).map_err(xml_err)
    }
}

impl FromStr for XmlDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut reader = Reader::from_str(s);
        reader.config_mut().trim_text(true);

        let mut open: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;
        loop {
            match reader.read_event().map_err(xml_err)? {
                Event::Start(e) => open.push(element(&e)?),
                Event::Empty(e) => attach(&mut open, &mut root, element(&e)?)?,
                Event::End(_) => {
                    let node = open
                        .pop()
                        .ok_or_else(|| Error::parse("unexpected closing tag"))?;
                    attach(&mut open, &mut root, node)?;
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(xml_err)?;
                    match open.last_mut() {
                        Some(node) => node.push_text(&text),
                        None if text.trim().is_empty() => {}
                        None => return Err(Error::parse("text outside the root element")),
                    }
                }
                Event::CData(c) => {
                    let bytes = c.into_inner();
                    let text = std::str::from_utf8(&bytes).map_err(xml_err)?;
                    if let Some(node) = open.last_mut() {
                        node.push_text(text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(Error::parse(format!("unclosed element <{}>", unclosed.name())));
        }
        root.map(XmlDocument::new)
            .ok_or_else(|| Error::parse("document has no root element"))
    }
}

fn xml_err(e: impl Display) -> Error {
    Error::parse(e.to_string())
}

fn element(e: &BytesStart<'_>) -> Result<XmlNode> {
    let qname = e.name();
    let name = std::str::from_utf8(qname.as_ref()).map_err(xml_err)?;
    let mut node = XmlNode::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(xml_err)?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(xml_err)?;
        let value = attr.unescape_value().map_err(xml_err)?;
        node.set_attribute(key, value.as_ref());
    }
    Ok(node)
}

fn attach(open: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.add_child(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::parse(format!(
            "second root element <{}>",
            node.name()
        )));
    }
    *root = Some(node);
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &XmlNode) -> Result<()> {
    let mut start = BytesStart::new(node.name());
    for (key, value) in node.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.children().is_empty() && node.text().is_empty() {
        writer.write_event(Event::Empty(start)).map_err(xml_err)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow())).map_err(xml_err)?;
    if !node.text().is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(node.text())))
            .map_err(xml_err)?;
    }
    for child in node.children() {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name())))
        .map_err(xml_err)?;
    Ok(())
}
