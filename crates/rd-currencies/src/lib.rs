//! # rd-currencies
//!
//! Currency descriptors, rounding conventions, and the registry that admits
//! non-standard currencies next to the baseline ISO set.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Configurable (non-standard) currencies.
pub mod configurable_currency;

/// Pre-defined baseline currencies.
pub mod currencies;

/// Currency descriptor and money types.
pub mod currency;

/// Minor currency units (pence, cents, agorot).
pub mod minor;

/// Currency registry.
pub mod registry;

/// Rounding conventions.
pub mod rounding;

pub use configurable_currency::ConfigurableCurrency;
pub use currency::{Currency, Money};
pub use minor::{convert_minor_to_major_currency, is_minor_currency, major_currency_code};
pub use registry::CurrencyRegistry;
pub use rounding::{Rounding, RoundingType};
