//! Equity underlying of a trade.
//!
//! Written either as a bare `<Name>` or as a full `<Underlying>` block
//! carrying identifier type, currency and exchange. The form read is the
//! form written back.

use rd_core::errors::{Error, Result};
use rd_xml::XmlNode;

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// An equity underlying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EquityUnderlying {
    name: String,
    identifier_type: Option<String>,
    currency: Option<String>,
    exchange: Option<String>,
    basic: bool,
}

impl EquityUnderlying {
    /// An underlying given by name only (`<Name>` form).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            basic: true,
            ..Self::default()
        }
    }

    /// A fully specified underlying (`<Underlying>` form).
    pub fn detailed(
        name: impl Into<String>,
        identifier_type: Option<String>,
        currency: Option<String>,
        exchange: Option<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            identifier_type: non_empty(identifier_type),
            currency: non_empty(currency),
            exchange: non_empty(exchange),
            basic: false,
        }
    }

    /// Name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier type, e.g. `RIC` or `BBG`.
    pub fn identifier_type(&self) -> Option<&str> {
        self.identifier_type.as_deref()
    }

    /// Quotation currency.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Listing exchange.
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    /// Whether this came from the bare `<Name>` form.
    pub fn is_basic(&self) -> bool {
        self.basic
    }

    /// Name used for market data: `type:name[:currency[:exchange]]`, or the
    /// bare name when no identifier type is given.
    pub fn equity_name(&self) -> String {
        let Some(id_type) = &self.identifier_type else {
            return self.name.clone();
        };
        let mut out = format!("{id_type}:{}", self.name);
        if let Some(ccy) = &self.currency {
            out.push(':');
            out.push_str(ccy);
            if let Some(exchange) = &self.exchange {
                out.push(':');
                out.push_str(exchange);
            }
        }
        out
    }

    /// Read from the trade data element that holds it.
    pub fn from_parent(parent: &XmlNode) -> Result<Self> {
        let Some(node) = parent.child("Underlying") else {
            return Ok(Self::new(parent.child_value("Name", true)?));
        };
        let kind = node.child_value("Type", true)?;
        if kind != "Equity" {
            return Err(Error::invalid_enum("Underlying/Type", kind, &["Equity"]));
        }
        Ok(Self::detailed(
            node.child_value("Name", true)?,
            node.optional_child_value("IdentifierType"),
            node.optional_child_value("Currency"),
            node.optional_child_value("Exchange"),
        ))
    }

    /// Write into the trade data element, in the form it was read.
    pub fn write_into(&self, parent: &mut XmlNode) {
        if self.basic {
            parent.add_child_value("Name", self.name.as_str());
            return;
        }
        let node = parent.add_child(XmlNode::new("Underlying"));
        node.add_child_value("Type", "Equity");
        node.add_child_value("Name", self.name.as_str());
        node.add_optional_child_value("IdentifierType", self.identifier_type.as_deref());
        node.add_optional_child_value("Currency", self.currency.as_deref());
        node.add_optional_child_value("Exchange", self.exchange.as_deref());
    }
}
