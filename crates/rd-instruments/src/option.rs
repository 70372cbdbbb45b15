//! Vanilla option on a single underlying.

use crate::exercise::Exercise;
use crate::instrument::{Instrument, PricingEngine, PricingResults};
use crate::payoff::{OptionType, PlainVanillaPayoff, StrikedPayoff};
use crate::settlement::SettlementType;
use rd_core::{errors::Result, Real};
use rd_currencies::Currency;
use rd_time::Date;
use std::sync::Arc;

// ────────────────────────────────────────────────────────────────────────────
// Engine arguments
// ────────────────────────────────────────────────────────────────────────────

/// Everything an engine sees of a vanilla option.
#[derive(Debug, Clone)]
pub struct VanillaOptionArguments {
    /// Payoff; strike in major units of the strike currency.
    pub payoff: Arc<dyn StrikedPayoff>,
    /// Exercise schedule.
    pub exercise: Exercise,
    /// Settlement, when the trade states one.
    pub settlement: Option<SettlementType>,
    /// Underlying name as resolved for market data lookup.
    pub underlying: String,
    /// Currency the payoff is paid in.
    pub payoff_currency: Currency,
    /// Currency the underlying and strike are quoted in.
    pub underlying_currency: Currency,
    /// Payoff currency differs from the underlying's currency.
    pub quanto: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// VanillaOption
// ────────────────────────────────────────────────────────────────────────────

/// A vanilla option on one underlying.
///
/// When `underlying_currency` differs from `payoff_currency` the option is a
/// quanto and engines must convert at a fixed rate.
#[derive(Debug, Clone)]
pub struct VanillaOption {
    payoff: Arc<dyn StrikedPayoff>,
    exercise: Exercise,
    settlement: Option<SettlementType>,
    underlying: String,
    payoff_currency: Currency,
    underlying_currency: Currency,
}

impl VanillaOption {
    /// A plain vanilla option paying in `currency` on an underlying quoted
    /// in the same currency.
    pub fn new(
        option_type: OptionType,
        strike: Real,
        exercise: Exercise,
        underlying: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            payoff: Arc::new(PlainVanillaPayoff::new(option_type, strike)),
            exercise,
            settlement: None,
            underlying: underlying.into(),
            payoff_currency: currency.clone(),
            underlying_currency: currency,
        }
    }

    /// Quote the underlying and strike in `currency` instead.
    pub fn with_underlying_currency(mut self, currency: Currency) -> Self {
        self.underlying_currency = currency;
        self
    }

    /// Record how exercise settles.
    pub fn with_settlement(mut self, settlement: Option<SettlementType>) -> Self {
        self.settlement = settlement;
        self
    }

    /// The strike.
    pub fn strike(&self) -> Real {
        self.payoff.strike()
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type()
    }

    /// The payoff.
    pub fn payoff(&self) -> &dyn StrikedPayoff {
        &*self.payoff
    }

    /// The exercise schedule.
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Underlying name.
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Payoff currency.
    pub fn payoff_currency(&self) -> &Currency {
        &self.payoff_currency
    }

    /// Underlying currency.
    pub fn underlying_currency(&self) -> &Currency {
        &self.underlying_currency
    }

    /// Whether payoff and underlying currencies differ.
    pub fn is_quanto(&self) -> bool {
        self.payoff_currency != self.underlying_currency
    }

    /// Arguments for a pricing engine.
    pub fn arguments(&self) -> VanillaOptionArguments {
        VanillaOptionArguments {
            payoff: Arc::clone(&self.payoff),
            exercise: self.exercise.clone(),
            settlement: self.settlement,
            underlying: self.underlying.clone(),
            payoff_currency: self.payoff_currency.clone(),
            underlying_currency: self.underlying_currency.clone(),
            quanto: self.is_quanto(),
        }
    }

    /// Price with `engine`.
    pub fn price(&self, engine: &dyn PricingEngine<VanillaOptionArguments>) -> Result<PricingResults> {
        engine.calculate(&self.arguments())
    }
}

impl Instrument for VanillaOption {
    fn maturity_date(&self) -> Option<Date> {
        Some(self.exercise.last_date())
    }
}
