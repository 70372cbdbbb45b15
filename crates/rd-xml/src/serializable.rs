//! The `XmlSerializable` contract.

use crate::document::XmlDocument;
use crate::node::XmlNode;
use rd_core::errors::Result;

/// An object that reads itself from, and writes itself to, a node tree.
///
/// `to_xml` followed by `from_xml` must reproduce an equal object; element
/// order on write is fixed per type.
pub trait XmlSerializable {
    /// Populate a new value from `node`.
    fn from_xml(node: &XmlNode) -> Result<Self>
    where
        Self: Sized;

    /// Write this value as a node tree.
    fn to_xml(&self) -> XmlNode;

    /// Parse `text` and read the root element.
    fn from_xml_string(text: &str) -> Result<Self>
    where
        Self: Sized,
    {
        let doc: XmlDocument = text.parse()?;
        Self::from_xml(doc.root())
    }

    /// Write this value as a standalone document.
    fn to_xml_string(&self) -> Result<String> {
        XmlDocument::new(self.to_xml()).to_xml_string()
    }
}
