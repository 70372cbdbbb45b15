//! # rd-instruments
//!
//! The instrument side of a built trade: payoffs, exercise schedules, and
//! the [`PricingEngine`] seam. Trades assemble a [`VanillaOption`] and hand
//! it, together with an engine supplied by the caller, to the portfolio.
//! No pricing numerics live here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;
pub mod settlement;

pub use exercise::{Exercise, ExerciseType};
pub use instrument::{Instrument, PricingEngine, PricingResults};
pub use option::{VanillaOption, VanillaOptionArguments};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff, StrikedPayoff};
pub use settlement::SettlementType;
