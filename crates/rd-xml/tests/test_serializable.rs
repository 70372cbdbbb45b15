//! The serialization contract exercised through a small record type.

use rd_core::errors::{Error, Result};
use rd_xml::{XmlNode, XmlSerializable};

#[derive(Debug, Clone, PartialEq)]
struct Fixing {
    index: String,
    value: f64,
    tags: Vec<String>,
    note: Option<String>,
}

impl XmlSerializable for Fixing {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("Fixing")?;
        Ok(Self {
            index: node.child_value("Index", true)?,
            value: node
                .child_value_as_real("Value", true)?
                .unwrap_or_default(),
            tags: node.children_values("Tags", "Tag", false)?,
            note: node.optional_child_value("Note"),
        })
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("Fixing");
        node.add_child_value("Index", self.index.as_str());
        node.add_child_value("Value", self.value.to_string());
        node.add_children_values("Tags", "Tag", &self.tags);
        node.add_optional_child_value("Note", self.note.as_deref());
        node
    }
}

#[test]
fn test_round_trip_through_text() {
    let fixing = Fixing {
        index: "EQ-RIC:.SPX".into(),
        value: 2147.56,
        tags: vec!["close".into(), "official".into()],
        note: None,
    };
    let text = fixing.to_xml_string().unwrap();
    assert!(!text.contains("<Note"));
    assert_eq!(Fixing::from_xml_string(&text).unwrap(), fixing);
}

#[test]
fn test_wrong_root_is_parse_error() {
    let err = Fixing::from_xml_string("<Quote><Index>X</Index></Quote>").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_missing_mandatory_child() {
    let err = Fixing::from_xml_string("<Fixing><Value>1</Value></Fixing>").unwrap_err();
    assert_eq!(err, Error::missing_field("Index"));
}
