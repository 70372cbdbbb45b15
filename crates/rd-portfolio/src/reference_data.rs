//! Reference data consulted when resolving trade underlyings.

use rd_core::errors::{Result, ResultExt};
use rd_xml::{XmlNode, XmlSerializable};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Static data for one equity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityReferenceDatum {
    /// Id trades refer to.
    pub id: String,
    /// Name used for market data lookup.
    pub equity_name: String,
    /// Quotation currency.
    pub currency: String,
    /// Listing exchange, if known.
    pub exchange: Option<String>,
}

/// Source of reference data.
pub trait ReferenceDataManager: fmt::Debug + Send + Sync {
    /// Equity data for `id`, if known.
    fn equity(&self, id: &str) -> Option<EquityReferenceDatum>;

    /// Whether any datum of `kind` exists for `id`.
    fn has_data(&self, kind: &str, id: &str) -> bool {
        kind == "Equity" && self.equity(id).is_some()
    }
}

/// In-memory reference data, readable from a `<ReferenceData>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicReferenceDataManager {
    equities: BTreeMap<String, EquityReferenceDatum>,
}

impl BasicReferenceDataManager {
    /// Empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace equity data.
    pub fn add_equity(&mut self, datum: EquityReferenceDatum) {
        self.equities.insert(datum.id.clone(), datum);
    }

    /// Number of equities held.
    pub fn len(&self) -> usize {
        self.equities.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.equities.is_empty()
    }
}

impl ReferenceDataManager for BasicReferenceDataManager {
    fn equity(&self, id: &str) -> Option<EquityReferenceDatum> {
        self.equities.get(id).cloned()
    }
}

fn read_equity(id: String, node: &XmlNode) -> Result<EquityReferenceDatum> {
    let data = node.required_child("EquityReferenceData")?;
    Ok(EquityReferenceDatum {
        id,
        equity_name: data.child_value("EquityName", true)?,
        currency: data.child_value("Currency", true)?,
        exchange: data.optional_child_value("Exchange"),
    })
}

impl XmlSerializable for BasicReferenceDataManager {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("ReferenceData")?;
        let mut manager = Self::new();
        for datum in node.children_named("ReferenceDatum") {
            let id = datum.attribute("id").unwrap_or_default().to_string();
            let kind = datum.child_value("Type", true)?;
            if kind != "Equity" {
                debug!(id = %id, kind = %kind, "skipping reference datum");
                continue;
            }
            let context = format!("ReferenceDatum '{id}'");
            manager.add_equity(read_equity(id, datum).context(context)?);
        }
        Ok(manager)
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("ReferenceData");
        for e in self.equities.values() {
            let datum = node.add_child(XmlNode::new("ReferenceDatum"));
            datum.set_attribute("id", e.id.as_str());
            datum.add_child_value("Type", "Equity");
            let data = datum.add_child(XmlNode::new("EquityReferenceData"));
            data.add_child_value("EquityName", e.equity_name.as_str());
            data.add_child_value("Currency", e.currency.as_str());
            data.add_optional_child_value("Exchange", e.exchange.as_deref());
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
<ReferenceData>
  <ReferenceDatum id="VOD">
    <Type>Equity</Type>
    <EquityReferenceData>
      <EquityName>RIC:VOD.L</EquityName>
      <Currency>GBp</Currency>
      <Exchange>XLON</Exchange>
    </EquityReferenceData>
  </ReferenceDatum>
  <ReferenceDatum id="ACME_BOND">
    <Type>Bond</Type>
    <BondReferenceData/>
  </ReferenceDatum>
</ReferenceData>"#;

    #[test]
    fn loads_equities_and_skips_other_types() {
        let rd = BasicReferenceDataManager::from_xml_string(DOC).unwrap();
        assert_eq!(rd.len(), 1);
        let vod = rd.equity("VOD").unwrap();
        assert_eq!(vod.equity_name, "RIC:VOD.L");
        assert_eq!(vod.exchange.as_deref(), Some("XLON"));
        assert!(rd.has_data("Equity", "VOD"));
        assert!(!rd.has_data("Bond", "ACME_BOND"));
    }

    #[test]
    fn round_trip() {
        let rd = BasicReferenceDataManager::from_xml_string(DOC).unwrap();
        assert_eq!(BasicReferenceDataManager::from_xml(&rd.to_xml()).unwrap(), rd);
    }

    #[test]
    fn missing_currency_names_datum() {
        let bad = DOC.replace("<Currency>GBp</Currency>", "");
        let err = BasicReferenceDataManager::from_xml_string(&bad).unwrap_err();
        assert_eq!(err.to_string(), "ReferenceDatum 'VOD': missing field 'Currency'");
    }
}
