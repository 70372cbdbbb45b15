//! # rd-portfolio
//!
//! Trade definitions and the portfolio that loads, builds and writes them.
//!
//! A [`Trade`] is read from a `<Trade>` element, dispatched on its
//! `TradeType` by the [`TradeFactory`]. Building a trade assembles an
//! instrument from `rd-instruments` and attaches a pricing engine obtained
//! from an [`EngineFactory`]; engines and reference data are collaborators
//! supplied by the caller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Asset classes.
pub mod asset_class;

/// Engine keys and the engine factory seam.
pub mod engine_factory;

/// Trade envelope.
pub mod envelope;

/// Equity option trade.
pub mod equity_option;

/// Option terms.
pub mod option_data;

/// Portfolio of trades.
pub mod portfolio;

/// Reference data seam.
pub mod reference_data;

/// The `Trade` contract.
pub mod trade;

/// Trade-type dispatch.
pub mod trade_factory;

/// Strike text.
pub mod trade_strike;

/// Equity underlying.
pub mod underlying;

/// Vanilla option trade.
pub mod vanilla_option;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use asset_class::AssetClass;
pub use engine_factory::{EngineFactory, EngineKey, EngineRegistry, VanillaOptionEngine};
pub use envelope::Envelope;
pub use equity_option::{EquityOption, EQUITY_OPTION};
pub use option_data::{OptionData, Premium};
pub use portfolio::{Portfolio, TradeBuildFailure};
pub use reference_data::{BasicReferenceDataManager, EquityReferenceDatum, ReferenceDataManager};
pub use trade::{InstrumentWrapper, Trade, TradeBase, UnderlyingIndices};
pub use trade_factory::{TradeFactory, TradeReader};
pub use trade_strike::TradeStrike;
pub use underlying::EquityUnderlying;
pub use vanilla_option::{VanillaBuildInputs, VanillaOptionTrade};
