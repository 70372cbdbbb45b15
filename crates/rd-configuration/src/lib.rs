//! # rd-configuration
//!
//! Configuration objects that describe how market curves are assembled
//! from quotes, and which non-standard currencies a run uses.
//!
//! Every object here reads from and writes to the [`rd_xml`] node model;
//! cross references between curves are kept as plain curve ids and only
//! resolved through [`CurveConfigurations`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CurrencyConfig` document.
pub mod currency_config;

/// The `CurveConfig` contract.
pub mod curve_config;

/// `CurveConfigurations` registry.
pub mod curve_configurations;

/// `DefaultCurveConfig` and its type discriminator.
pub mod default_curve_config;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use currency_config::CurrencyConfig;
pub use curve_config::CurveConfig;
pub use curve_configurations::CurveConfigurations;
pub use default_curve_config::{DefaultCurveConfig, DefaultCurveType};
