//! Vanilla option trades: the build shared by every single-asset option.

use crate::asset_class::AssetClass;
use crate::engine_factory::{EngineFactory, EngineKey};
use crate::envelope::Envelope;
use crate::option_data::OptionData;
use crate::trade::{InstrumentWrapper, TradeBase};
use crate::trade_strike::TradeStrike;
use rd_core::errors::{Error, Result};
use rd_core::Real;
use rd_instruments::VanillaOption;
use tracing::debug;

/// What a concrete trade resolved before handing over to the vanilla build.
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaBuildInputs {
    /// Underlying name for market data.
    pub underlying: String,
    /// Major currency the payoff is paid in.
    pub payoff_currency: String,
    /// Major currency the underlying and strike are quoted in.
    pub underlying_currency: String,
    /// Strike in major units of `underlying_currency`.
    pub strike: Real,
}

impl VanillaBuildInputs {
    /// Whether the payoff and underlying currencies differ.
    pub fn is_quanto(&self) -> bool {
        self.payoff_currency != self.underlying_currency
    }
}

/// A vanilla option on one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaOptionTrade {
    base: TradeBase,
    option: OptionData,
    asset_class: AssetClass,
    asset_name: String,
    currency: String,
    strike: TradeStrike,
    quantity: Real,
}

impl VanillaOptionTrade {
    /// A vanilla option trade.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        trade_type: impl Into<String>,
        envelope: Envelope,
        asset_class: AssetClass,
        option: OptionData,
        asset_name: impl Into<String>,
        currency: impl Into<String>,
        strike: TradeStrike,
        quantity: Real,
    ) -> Self {
        Self {
            base: TradeBase::new(id, trade_type, envelope),
            option,
            asset_class,
            asset_name: asset_name.into(),
            currency: currency.into(),
            strike,
            quantity,
        }
    }

    pub(crate) fn from_base(
        base: TradeBase,
        asset_class: AssetClass,
        option: OptionData,
        asset_name: String,
        currency: String,
        strike: TradeStrike,
        quantity: Real,
    ) -> Self {
        Self {
            base,
            option,
            asset_class,
            asset_name,
            currency,
            strike,
            quantity,
        }
    }

    /// Shared trade state.
    pub fn base(&self) -> &TradeBase {
        &self.base
    }

    /// Shared trade state, mutably.
    pub fn base_mut(&mut self) -> &mut TradeBase {
        &mut self.base
    }

    /// Option terms.
    pub fn option(&self) -> &OptionData {
        &self.option
    }

    /// Asset class.
    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Underlying asset name.
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// Trade currency in major units.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Strike in major units.
    pub fn strike(&self) -> &TradeStrike {
        &self.strike
    }

    /// Number of units.
    pub fn quantity(&self) -> Real {
        self.quantity
    }

    /// Assemble the option from `inputs`, fetch its engine and attach both.
    ///
    /// Build outputs are cleared first, so a failed build leaves the trade
    /// unbuilt.
    pub fn build_vanilla(&mut self, factory: &dyn EngineFactory, inputs: &VanillaBuildInputs) -> Result<()> {
        self.base.reset();
        let exercise = self.option.exercise()?;
        let quanto = inputs.is_quanto();
        let key = EngineKey::new(self.base.trade_type(), self.asset_class, exercise.exercise_type())
            .with_quanto(quanto);
        let engine = factory.engine(&key).ok_or_else(|| Error::EngineNotFound {
            trade_type: self.base.trade_type().to_string(),
            asset_class: self.asset_class.to_string(),
            currency: inputs.payoff_currency.clone(),
            strike_currency: if quanto {
                inputs.underlying_currency.clone()
            } else {
                String::new()
            },
            quanto,
        })?;

        let payoff_ccy = factory.currencies().parse(&inputs.payoff_currency)?;
        let underlying_ccy = factory.currencies().parse(&inputs.underlying_currency)?;
        let maturity = exercise.last_date();
        let instrument = VanillaOption::new(
            self.option.call_put(),
            inputs.strike,
            exercise,
            inputs.underlying.as_str(),
            payoff_ccy,
        )
        .with_underlying_currency(underlying_ccy)
        .with_settlement(self.option.settlement());

        let multiplier = self.quantity * self.option.long_short().sign();
        self.base.attach(
            InstrumentWrapper::new(instrument, engine, multiplier),
            inputs.payoff_currency.as_str(),
            inputs.strike * self.quantity,
            maturity,
        );
        debug!(
            trade_id = %self.base.id(),
            engine = %key,
            underlying = %inputs.underlying,
            "built vanilla option"
        );
        Ok(())
    }
}
