//! `XmlNode` — a detached element tree with typed child accessors.

use rd_core::errors::{Error, Result};
use rd_core::utilities::{format_bool, parse_bool, parse_real};
use rd_core::Real;

/// An element: tag name, ordered attributes, ordered children and text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
    text: String,
}

impl XmlNode {
    /// An empty element named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// An element holding only text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    // ── Element data ─────────────────────────────────────────────────────────

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, trimmed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Append to the text content.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set attribute `key`, replacing an existing value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Children in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    // ── Reading ──────────────────────────────────────────────────────────────

    /// Fail with [`Error::Parse`] unless this element is named `expected`.
    pub fn check_name(&self, expected: &str) -> Result<()> {
        if self.name == expected {
            Ok(())
        } else {
            Err(Error::parse(format!(
                "expected element <{expected}>, found <{}>",
                self.name
            )))
        }
    }

    /// First child named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child named `name`, or [`Error::MissingField`].
    pub fn required_child(&self, name: &str) -> Result<&XmlNode> {
        self.child(name).ok_or_else(|| Error::missing_field(name))
    }

    /// Every child named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of child `name`.
    ///
    /// An absent child is [`Error::MissingField`] when `mandatory`, and the
    /// empty string otherwise. A present child with empty text is returned
    /// as the empty string either way.
    pub fn child_value(&self, name: &str, mandatory: bool) -> Result<String> {
        match self.child(name) {
            Some(c) => Ok(c.text().to_string()),
            None if mandatory => Err(Error::missing_field(name)),
            None => Ok(String::new()),
        }
    }

    /// Text of child `name`; `None` when the child is absent or empty.
    pub fn optional_child_value(&self, name: &str) -> Option<String> {
        self.child(name)
            .map(|c| c.text())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    /// Child `name` parsed as a boolean; `default` when absent.
    pub fn child_value_as_bool(&self, name: &str, mandatory: bool, default: bool) -> Result<bool> {
        match self.child(name) {
            Some(c) => parse_bool(c.text()).map_err(|e| e.in_context(name)),
            None if mandatory => Err(Error::missing_field(name)),
            None => Ok(default),
        }
    }

    /// Child `name` parsed as a real; `None` when absent and not mandatory.
    pub fn child_value_as_real(&self, name: &str, mandatory: bool) -> Result<Option<Real>> {
        match self.child(name) {
            Some(c) => parse_real(c.text()).map(Some).map_err(|e| e.in_context(name)),
            None if mandatory => Err(Error::missing_field(name)),
            None => Ok(None),
        }
    }

    /// Texts of every `item` child under the `group` child, in document
    /// order. An absent group is [`Error::MissingField`] when `mandatory`
    /// and an empty list otherwise.
    pub fn children_values(&self, group: &str, item: &str, mandatory: bool) -> Result<Vec<String>> {
        match self.child(group) {
            Some(g) => Ok(g.children_named(item).map(|c| c.text().to_string()).collect()),
            None if mandatory => Err(Error::missing_field(group)),
            None => Ok(Vec::new()),
        }
    }

    // ── Writing ──────────────────────────────────────────────────────────────

    /// Append `child` and return a handle to it.
    pub fn add_child(&mut self, child: XmlNode) -> &mut XmlNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a text-only child.
    pub fn add_child_value(&mut self, name: &str, value: impl Into<String>) {
        self.children.push(XmlNode::with_text(name, value));
    }

    /// Append a text-only child only when `value` is present and non-empty.
    pub fn add_optional_child_value(&mut self, name: &str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.add_child_value(name, v);
        }
    }

    /// Append a boolean child (`true`/`false`).
    pub fn add_child_bool(&mut self, name: &str, value: bool) {
        self.add_child_value(name, format_bool(value));
    }

    /// Append `<group><item>v</item>...</group>`, preserving order.
    pub fn add_children_values<S: AsRef<str>>(&mut self, group: &str, item: &str, values: &[S]) {
        let g = self.add_child(XmlNode::new(group));
        for v in values {
            g.add_child_value(item, v.as_ref());
        }
    }
}
