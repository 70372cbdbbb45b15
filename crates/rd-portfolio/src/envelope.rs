//! Trade envelope: who the trade is with and where it is booked.

use rd_core::errors::Result;
use rd_xml::{XmlNode, XmlSerializable};
use std::collections::{BTreeMap, BTreeSet};

/// Counterparty, netting set, portfolio memberships and free-form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    counterparty: String,
    netting_set_id: String,
    portfolio_ids: BTreeSet<String>,
    additional_fields: BTreeMap<String, String>,
}

impl Envelope {
    /// An envelope with no portfolio ids or additional fields.
    pub fn new(counterparty: impl Into<String>, netting_set_id: impl Into<String>) -> Self {
        Self {
            counterparty: counterparty.into().trim().to_string(),
            netting_set_id: netting_set_id.into().trim().to_string(),
            ..Self::default()
        }
    }

    /// Add a portfolio membership.
    pub fn with_portfolio_id(mut self, id: impl Into<String>) -> Self {
        self.portfolio_ids.insert(id.into().trim().to_string());
        self
    }

    /// Add a free-form field.
    pub fn with_additional_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_fields.insert(key.into(), value.into().trim().to_string());
        self
    }

    /// Counterparty id.
    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// Netting set id.
    pub fn netting_set_id(&self) -> &str {
        &self.netting_set_id
    }

    /// Portfolio ids.
    pub fn portfolio_ids(&self) -> &BTreeSet<String> {
        &self.portfolio_ids
    }

    /// Additional fields.
    pub fn additional_fields(&self) -> &BTreeMap<String, String> {
        &self.additional_fields
    }
}

impl XmlSerializable for Envelope {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("Envelope")?;
        let additional_fields = node
            .child("AdditionalFields")
            .map(|g| {
                g.children()
                    .iter()
                    .map(|c| (c.name().to_string(), c.text().to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            counterparty: node.child_value("CounterParty", false)?,
            netting_set_id: node.child_value("NettingSetId", false)?,
            portfolio_ids: node
                .children_values("PortfolioIds", "PortfolioId", false)?
                .into_iter()
                .collect(),
            additional_fields,
        })
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("Envelope");
        node.add_child_value("CounterParty", self.counterparty.as_str());
        node.add_child_value("NettingSetId", self.netting_set_id.as_str());
        if !self.portfolio_ids.is_empty() {
            let ids: Vec<&str> = self.portfolio_ids.iter().map(String::as_str).collect();
            node.add_children_values("PortfolioIds", "PortfolioId", &ids);
        }
        if !self.additional_fields.is_empty() {
            let fields = node.add_child(XmlNode::new("AdditionalFields"));
            for (k, v) in &self.additional_fields {
                fields.add_child_value(k, v.as_str());
            }
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let env = Envelope::new("CPTY_A", "NS_1")
            .with_portfolio_id("EQ_DESK")
            .with_portfolio_id("BOOK_7")
            .with_additional_field("trader", "jdoe");
        let back = Envelope::from_xml(&env.to_xml()).unwrap();
        assert_eq!(back, env);
        assert_eq!(back.portfolio_ids().len(), 2);
        assert_eq!(back.additional_fields()["trader"], "jdoe");
    }

    #[test]
    fn empty_envelope_omits_groups() {
        let node = Envelope::default().to_xml();
        assert!(node.child("PortfolioIds").is_none());
        assert!(node.child("AdditionalFields").is_none());
        assert_eq!(Envelope::from_xml(&node).unwrap(), Envelope::default());
    }
}
