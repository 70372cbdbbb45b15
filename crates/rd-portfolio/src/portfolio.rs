//! `Portfolio` — a set of trades loaded, built and written together.

use crate::engine_factory::EngineFactory;
use crate::reference_data::ReferenceDataManager;
use crate::trade::{Trade, UnderlyingIndices};
use crate::trade_factory::TradeFactory;
use rd_core::errors::{Error, Result};
use rd_xml::{XmlNode, XmlSerializable};
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// A trade that failed to build and was removed.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeBuildFailure {
    /// Trade id.
    pub trade_id: String,
    /// Trade type.
    pub trade_type: String,
    /// Why the build failed.
    pub error: Error,
}

/// Trades keyed by id.
#[derive(Debug, Default)]
pub struct Portfolio {
    trades: BTreeMap<String, Box<dyn Trade>>,
}

impl Portfolio {
    /// An empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `trade`.
    ///
    /// # Errors
    /// [`Error::Parse`] when a trade with the same id is already held.
    pub fn add(&mut self, trade: Box<dyn Trade>) -> Result<()> {
        let id = trade.id().to_string();
        if self.trades.contains_key(&id) {
            return Err(Error::parse(format!("duplicate trade id '{id}'")));
        }
        self.trades.insert(id, trade);
        Ok(())
    }

    /// Remove and return trade `id`.
    pub fn remove(&mut self, id: &str) -> Option<Box<dyn Trade>> {
        self.trades.remove(id)
    }

    /// Trade `id`.
    pub fn get(&self, id: &str) -> Option<&dyn Trade> {
        self.trades.get(id).map(|t| t.as_ref())
    }

    /// Whether trade `id` is held.
    pub fn has(&self, id: &str) -> bool {
        self.trades.contains_key(id)
    }

    /// Trade ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.trades.keys().map(String::as_str)
    }

    /// Trades in id order.
    pub fn trades(&self) -> impl Iterator<Item = &dyn Trade> {
        self.trades.values().map(|t| t.as_ref())
    }

    /// Number of trades.
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Whether there are no trades.
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Read `<Portfolio>` with trade types known to `factory`.
    pub fn from_xml_with(node: &XmlNode, factory: &TradeFactory) -> Result<Self> {
        node.check_name("Portfolio")?;
        let mut portfolio = Self::new();
        for child in node.children_named("Trade") {
            portfolio.add(factory.build(child)?)?;
        }
        debug!(trades = portfolio.len(), "loaded portfolio");
        Ok(portfolio)
    }

    /// Build every trade.
    ///
    /// A trade that fails is logged, removed and reported; the others are
    /// still built.
    pub fn build(&mut self, factory: &dyn EngineFactory) -> Vec<TradeBuildFailure> {
        let mut failures = Vec::new();
        for (id, trade) in self.trades.iter_mut() {
            if let Err(e) = trade.build(factory) {
                error!(trade_id = %id, trade_type = %trade.trade_type(), error = %e, "trade build failed");
                failures.push(TradeBuildFailure {
                    trade_id: id.clone(),
                    trade_type: trade.trade_type().to_string(),
                    error: e,
                });
            }
        }
        for f in &failures {
            self.trades.remove(&f.trade_id);
        }
        info!(
            built = self.trades.len(),
            failed = failures.len(),
            "portfolio build finished"
        );
        failures
    }

    /// Union of every trade's underlying names.
    pub fn underlying_indices(&self, reference_data: Option<&dyn ReferenceDataManager>) -> UnderlyingIndices {
        let mut all = UnderlyingIndices::new();
        for trade in self.trades.values() {
            for (asset_class, names) in trade.underlying_indices(reference_data) {
                all.entry(asset_class).or_default().extend(names);
            }
        }
        all
    }
}

impl XmlSerializable for Portfolio {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Self::from_xml_with(node, &TradeFactory::default())
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = XmlNode::new("Portfolio");
        for trade in self.trades.values() {
            node.add_child(trade.to_xml());
        }
        node
    }
}
