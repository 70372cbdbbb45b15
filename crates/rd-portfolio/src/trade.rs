//! The `Trade` contract and the state every trade carries.

use crate::asset_class::AssetClass;
use crate::engine_factory::{EngineFactory, VanillaOptionEngine};
use crate::envelope::Envelope;
use crate::reference_data::ReferenceDataManager;
use rd_core::errors::{Error, Result};
use rd_core::Real;
use rd_instruments::VanillaOption;
use rd_time::Date;
use rd_xml::{XmlNode, XmlSerializable};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Underlying names a trade depends on, per asset class.
pub type UnderlyingIndices = BTreeMap<AssetClass, BTreeSet<String>>;

// ────────────────────────────────────────────────────────────────────────────
// InstrumentWrapper
// ────────────────────────────────────────────────────────────────────────────

/// A built instrument with its engine and position multiplier.
#[derive(Debug, Clone)]
pub struct InstrumentWrapper {
    instrument: VanillaOption,
    engine: VanillaOptionEngine,
    multiplier: Real,
}

impl InstrumentWrapper {
    /// Wrap `instrument`, priced by `engine` and scaled by `multiplier`
    /// (quantity times the long/short sign).
    pub fn new(instrument: VanillaOption, engine: VanillaOptionEngine, multiplier: Real) -> Self {
        Self {
            instrument,
            engine,
            multiplier,
        }
    }

    /// The instrument.
    pub fn instrument(&self) -> &VanillaOption {
        &self.instrument
    }

    /// The position multiplier.
    pub fn multiplier(&self) -> Real {
        self.multiplier
    }

    /// Engine NPV times the multiplier.
    pub fn npv(&self) -> Result<Real> {
        Ok(self.instrument.price(&*self.engine)?.npv * self.multiplier)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TradeBase
// ────────────────────────────────────────────────────────────────────────────

/// Identity, envelope and build outputs common to every trade.
///
/// Equality covers the identity and envelope only; build outputs are
/// derived state.
#[derive(Debug, Clone, Default)]
pub struct TradeBase {
    id: String,
    trade_type: String,
    envelope: Envelope,
    npv_currency: Option<String>,
    notional: Option<Real>,
    maturity: Option<Date>,
    instrument: Option<InstrumentWrapper>,
}

impl PartialEq for TradeBase {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.trade_type == other.trade_type && self.envelope == other.envelope
    }
}

impl TradeBase {
    /// A trade of `trade_type` with the given id and envelope.
    pub fn new(id: impl Into<String>, trade_type: impl Into<String>, envelope: Envelope) -> Self {
        Self {
            id: id.into(),
            trade_type: trade_type.into(),
            envelope,
            ..Self::default()
        }
    }

    /// Trade id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the trade id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Trade type discriminator.
    pub fn trade_type(&self) -> &str {
        &self.trade_type
    }

    /// Envelope.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Currency of the NPV, once built.
    pub fn npv_currency(&self) -> Option<&str> {
        self.npv_currency.as_deref()
    }

    /// Notional, once built.
    pub fn notional(&self) -> Option<Real> {
        self.notional
    }

    /// Maturity, once built.
    pub fn maturity(&self) -> Option<Date> {
        self.maturity
    }

    /// The built instrument.
    pub fn instrument(&self) -> Option<&InstrumentWrapper> {
        self.instrument.as_ref()
    }

    /// Record a successful build.
    pub fn attach(
        &mut self,
        instrument: InstrumentWrapper,
        npv_currency: impl Into<String>,
        notional: Real,
        maturity: Date,
    ) {
        self.instrument = Some(instrument);
        self.npv_currency = Some(npv_currency.into());
        self.notional = Some(notional);
        self.maturity = Some(maturity);
    }

    /// Drop all build outputs.
    pub fn reset(&mut self) {
        self.instrument = None;
        self.npv_currency = None;
        self.notional = None;
        self.maturity = None;
    }

    /// Read `<Trade id=..>`, its `TradeType` and `Envelope`.
    pub fn from_xml(node: &XmlNode) -> Result<Self> {
        node.check_name("Trade")?;
        let id = node
            .attribute("id")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::missing_field("id"))?;
        let envelope = match node.child("Envelope") {
            Some(env) => Envelope::from_xml(env)?,
            None => Envelope::default(),
        };
        Ok(Self::new(id, node.child_value("TradeType", true)?, envelope))
    }

    /// Write `<Trade id=..>` with `TradeType` and `Envelope`; callers append
    /// the trade data element.
    pub fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("Trade");
        node.set_attribute("id", self.id.as_str());
        node.add_child_value("TradeType", self.trade_type.as_str());
        node.add_child(self.envelope.to_xml());
        node
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trade
// ────────────────────────────────────────────────────────────────────────────

/// A serializable trade that can be built into a priced instrument.
pub trait Trade: XmlSerializable + fmt::Debug + Send + Sync {
    /// Shared trade state.
    fn base(&self) -> &TradeBase;

    /// Shared trade state, mutably.
    fn base_mut(&mut self) -> &mut TradeBase;

    /// Build the instrument and attach it with an engine from `factory`.
    fn build(&mut self, factory: &dyn EngineFactory) -> Result<()>;

    /// Underlying names this trade needs market data for.
    fn underlying_indices(&self, _reference_data: Option<&dyn ReferenceDataManager>) -> UnderlyingIndices {
        UnderlyingIndices::new()
    }

    /// Trade id.
    fn id(&self) -> &str {
        self.base().id()
    }

    /// Trade type discriminator.
    fn trade_type(&self) -> &str {
        self.base().trade_type()
    }

    /// NPV of the built instrument.
    fn npv(&self) -> Result<Real> {
        match self.base().instrument() {
            Some(w) => w.npv(),
            None => Err(Error::Runtime(format!("trade '{}' is not built", self.id()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_round_trip_and_equality() {
        let base = TradeBase::new("T1", "EquityOption", Envelope::new("CPTY", "NS"));
        let back = TradeBase::from_xml(&base.to_xml()).unwrap();
        assert_eq!(back, base);
        assert_eq!(back.npv_currency(), None);
    }

    #[test]
    fn id_attribute_is_mandatory() {
        let mut node = XmlNode::new("Trade");
        node.add_child_value("TradeType", "EquityOption");
        assert_eq!(TradeBase::from_xml(&node).unwrap_err(), Error::missing_field("id"));
    }

    #[test]
    fn envelope_is_optional() {
        let mut node = XmlNode::new("Trade");
        node.set_attribute("id", "T2");
        node.add_child_value("TradeType", "EquityOption");
        let base = TradeBase::from_xml(&node).unwrap();
        assert_eq!(base.envelope(), &Envelope::default());
    }
}
