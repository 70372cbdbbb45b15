//! Custom currencies for codes missing from the baseline set.

use crate::currency::Currency;
use crate::rounding::Rounding;
use rd_core::Integer;
use std::ops::Deref;

/// A currency built from configuration rather than the baseline ISO set.
///
/// The descriptor is fixed at construction; it dereferences to
/// [`Currency`] and converts into one for use in amounts and FX.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigurableCurrency {
    currency: Currency,
}

impl ConfigurableCurrency {
    /// Build a currency descriptor.
    ///
    /// No validation is performed beyond what the argument types enforce;
    /// uniqueness of codes is checked by [`CurrencyRegistry`](crate::CurrencyRegistry).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        numeric_code: Integer,
        symbol: impl Into<String>,
        fraction_symbol: impl Into<String>,
        fractions_per_unit: Integer,
        rounding: Rounding,
        format_string: impl Into<String>,
    ) -> Self {
        Self {
            currency: Currency::from_parts(
                name,
                code,
                numeric_code,
                symbol,
                fraction_symbol,
                fractions_per_unit,
                rounding,
                format_string,
            ),
        }
    }

    /// The underlying shared descriptor.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl Deref for ConfigurableCurrency {
    type Target = Currency;

    fn deref(&self) -> &Currency {
        &self.currency
    }
}

impl From<ConfigurableCurrency> for Currency {
    fn from(c: ConfigurableCurrency) -> Self {
        c.currency
    }
}
