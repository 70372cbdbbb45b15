//! Dispatch from the `TradeType` tag to a concrete trade reader.

use crate::equity_option::{EquityOption, EQUITY_OPTION};
use crate::trade::Trade;
use rd_core::errors::{Error, Result, ResultExt};
use rd_xml::{XmlNode, XmlSerializable};
use std::collections::BTreeMap;
use std::fmt;

/// Reads one trade element into a boxed trade.
pub type TradeReader = fn(&XmlNode) -> Result<Box<dyn Trade>>;

fn read_equity_option(node: &XmlNode) -> Result<Box<dyn Trade>> {
    Ok(Box::new(EquityOption::from_xml(node)?))
}

/// Trade readers keyed by trade type.
#[derive(Clone)]
pub struct TradeFactory {
    readers: BTreeMap<String, TradeReader>,
}

impl fmt::Debug for TradeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradeFactory")
            .field("trade_types", &self.readers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for TradeFactory {
    /// Knows every trade type in this crate.
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(EQUITY_OPTION, read_equity_option);
        factory
    }
}

impl TradeFactory {
    /// A factory that knows no trade types.
    pub fn empty() -> Self {
        Self {
            readers: BTreeMap::new(),
        }
    }

    /// Register `reader` for `trade_type`, replacing any previous one.
    pub fn register(&mut self, trade_type: impl Into<String>, reader: TradeReader) {
        self.readers.insert(trade_type.into(), reader);
    }

    /// Known trade types, ascending.
    pub fn trade_types(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }

    /// Read a `<Trade>` element.
    ///
    /// # Errors
    /// [`Error::InvalidEnum`] for an unregistered `TradeType`, in the
    /// context of the trade id.
    pub fn build(&self, node: &XmlNode) -> Result<Box<dyn Trade>> {
        node.check_name("Trade")?;
        let id = node.attribute("id").unwrap_or_default();
        let trade_type = node
            .child_value("TradeType", true)
            .with_context(|| format!("Trade '{id}'"))?;
        match self.readers.get(&trade_type) {
            Some(read) => read(node),
            None => {
                let known: Vec<&str> = self.trade_types().collect();
                Err(Error::invalid_enum("TradeType", trade_type, &known)
                    .in_context(format!("Trade '{id}'")))
            }
        }
    }
}
