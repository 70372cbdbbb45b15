//! `EquityOption` — a vanilla option on a single equity.
//!
//! The trade keeps its currency and strike exactly as written (the *local*
//! values, possibly in a minor unit such as `GBp`) and serializes those.
//! The vanilla view holds the same terms in major units. When a strike
//! currency is given and differs from the trade currency the option is a
//! quanto: the strike and underlying are quoted in the strike currency and
//! the payoff is paid in the trade currency.

use crate::asset_class::AssetClass;
use crate::engine_factory::EngineFactory;
use crate::envelope::Envelope;
use crate::option_data::OptionData;
use crate::reference_data::ReferenceDataManager;
use crate::trade::{Trade, TradeBase, UnderlyingIndices};
use crate::trade_strike::TradeStrike;
use crate::underlying::EquityUnderlying;
use crate::vanilla_option::{VanillaBuildInputs, VanillaOptionTrade};
use rd_core::errors::{Error, Result, ResultExt};
use rd_core::utilities::format_real;
use rd_core::Real;
use rd_currencies::{convert_minor_to_major_currency, is_minor_currency, major_currency_code};
use rd_xml::{XmlNode, XmlSerializable};
use tracing::{debug, warn};

/// Trade type discriminator.
pub const EQUITY_OPTION: &str = "EquityOption";

/// A vanilla option on one equity.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityOption {
    vanilla: VanillaOptionTrade,
    equity_underlying: EquityUnderlying,
    local_currency: String,
    local_strike: TradeStrike,
    strike_currency: Option<String>,
}

fn to_major_units(currency: &str, strike: &TradeStrike) -> TradeStrike {
    match strike.value() {
        Some(v) if is_minor_currency(currency) => {
            TradeStrike::from_value(convert_minor_to_major_currency(currency, v))
        }
        _ => strike.clone(),
    }
}

impl EquityOption {
    /// An equity option.
    ///
    /// `currency` and `strike` are kept as the local values; an empty
    /// `strike_currency` means none.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        envelope: Envelope,
        option: OptionData,
        equity_underlying: EquityUnderlying,
        currency: impl Into<String>,
        strike: impl Into<TradeStrike>,
        quantity: Real,
        strike_currency: Option<String>,
    ) -> Self {
        Self::assemble(
            TradeBase::new(id, EQUITY_OPTION, envelope),
            option,
            equity_underlying,
            currency.into(),
            strike.into(),
            quantity,
            strike_currency,
        )
    }

    fn assemble(
        base: TradeBase,
        option: OptionData,
        equity_underlying: EquityUnderlying,
        currency: String,
        strike: TradeStrike,
        quantity: Real,
        strike_currency: Option<String>,
    ) -> Self {
        let currency = currency.trim().to_string();
        let strike_currency = strike_currency
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let strike_units = strike_currency.as_deref().unwrap_or(&currency);
        let major_strike = to_major_units(strike_units, &strike);
        let vanilla = VanillaOptionTrade::from_base(
            base,
            AssetClass::EQ,
            option,
            equity_underlying.name().to_string(),
            major_currency_code(&currency).to_string(),
            major_strike,
            quantity,
        );
        Self {
            vanilla,
            equity_underlying,
            local_currency: currency,
            local_strike: strike,
            strike_currency,
        }
    }

    /// The vanilla view, in major units.
    pub fn vanilla(&self) -> &VanillaOptionTrade {
        &self.vanilla
    }

    /// Option terms.
    pub fn option(&self) -> &OptionData {
        self.vanilla.option()
    }

    /// The underlying as written.
    pub fn equity_underlying(&self) -> &EquityUnderlying {
        &self.equity_underlying
    }

    /// Market data name of the underlying.
    pub fn equity_name(&self) -> String {
        self.equity_underlying.equity_name()
    }

    /// Trade currency in major units.
    pub fn currency(&self) -> &str {
        self.vanilla.currency()
    }

    /// Strike in major units.
    pub fn strike(&self) -> &TradeStrike {
        self.vanilla.strike()
    }

    /// Trade currency as written.
    pub fn local_currency(&self) -> &str {
        &self.local_currency
    }

    /// Strike as written.
    pub fn local_strike(&self) -> &TradeStrike {
        &self.local_strike
    }

    /// Strike currency, when given.
    pub fn strike_currency(&self) -> Option<&str> {
        self.strike_currency.as_deref()
    }

    /// Number of units.
    pub fn quantity(&self) -> Real {
        self.vanilla.quantity()
    }

    /// Whether a strike currency is given and differs from the trade
    /// currency (compared in major units).
    pub fn is_quanto(&self) -> bool {
        self.strike_currency
            .as_deref()
            .is_some_and(|s| major_currency_code(s) != self.vanilla.currency())
    }

    fn resolved_equity_name(&self, reference_data: Option<&dyn ReferenceDataManager>) -> String {
        let name = self.equity_underlying.equity_name();
        reference_data
            .and_then(|rd| {
                rd.equity(&name)
                    .or_else(|| rd.equity(self.equity_underlying.name()))
            })
            .map(|datum| datum.equity_name)
            .unwrap_or(name)
    }

    fn read(base: TradeBase, node: &XmlNode) -> Result<Self> {
        if base.trade_type() != EQUITY_OPTION {
            return Err(Error::invalid_enum("TradeType", base.trade_type(), &[EQUITY_OPTION]));
        }
        let data = node.required_child("EquityOptionData")?;
        let option = OptionData::from_xml(data.required_child("OptionData")?)?;
        let equity_underlying = EquityUnderlying::from_parent(data)?;
        let currency = data.child_value("Currency", true)?;
        let strike = TradeStrike::new(data.child_value("Strike", true)?);
        let quantity = data.child_value_as_real("Quantity", true)?.unwrap_or_default();
        let strike_currency = data.optional_child_value("StrikeCurrency");
        if strike.is_deferred() {
            warn!(trade_id = %base.id(), strike = %strike, "strike is not numeric; trade cannot be built");
        }
        Ok(Self::assemble(
            base,
            option,
            equity_underlying,
            currency,
            strike,
            quantity,
            strike_currency,
        ))
    }
}

impl Trade for EquityOption {
    fn base(&self) -> &TradeBase {
        self.vanilla.base()
    }

    fn base_mut(&mut self) -> &mut TradeBase {
        self.vanilla.base_mut()
    }

    fn build(&mut self, factory: &dyn EngineFactory) -> Result<()> {
        let strike = self.strike().value().ok_or_else(|| {
            Error::InvalidArgument(format!(
                "strike '{}' must be numeric to build",
                self.local_strike
            ))
        })?;
        let strike_units = self
            .strike_currency
            .as_deref()
            .unwrap_or(&self.local_currency);
        let inputs = VanillaBuildInputs {
            underlying: self.resolved_equity_name(factory.reference_data()),
            payoff_currency: self.currency().to_string(),
            underlying_currency: major_currency_code(strike_units).to_string(),
            strike,
        };
        self.vanilla.build_vanilla(factory, &inputs)?;
        debug!(
            trade_id = %self.id(),
            quanto = self.is_quanto(),
            local_currency = %self.local_currency,
            "built equity option"
        );
        Ok(())
    }

    fn underlying_indices(&self, reference_data: Option<&dyn ReferenceDataManager>) -> UnderlyingIndices {
        let mut indices = UnderlyingIndices::new();
        indices
            .entry(AssetClass::EQ)
            .or_default()
            .insert(self.resolved_equity_name(reference_data));
        indices
    }
}

impl XmlSerializable for EquityOption {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let base = TradeBase::from_xml(node)
            .with_context(|| format!("Trade '{}'", node.attribute("id").unwrap_or_default()))?;
        let context = format!("Trade '{}'", base.id());
        Self::read(base, node).context(context)
    }

    fn to_xml(&self) -> XmlNode {
        let mut node = self.base().to_xml();
        let data = node.add_child(XmlNode::new("EquityOptionData"));
        data.add_child(self.option().to_xml());
        self.equity_underlying.write_into(data);
        data.add_child_value("Currency", self.local_currency.as_str());
        data.add_child_value("Strike", self.local_strike.text());
        data.add_optional_child_value("StrikeCurrency", self.strike_currency.as_deref());
        data.add_child_value("Quantity", format_real(self.quantity()));
        node
    }
}
