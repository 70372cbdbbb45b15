//! `Currency` — an immutable, shareable currency descriptor.

use crate::rounding::Rounding;
use rd_core::{Integer, Real};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq, Hash)]
struct CurrencyData {
    name: String,
    code: String,
    numeric_code: Integer,
    symbol: String,
    fraction_symbol: String,
    fractions_per_unit: Integer,
    rounding: Rounding,
    format_string: String,
}

/// Data describing a single currency.
///
/// Cloning is cheap: every clone shares the same descriptor, and there is
/// no way to alter it once built.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    data: Arc<CurrencyData>,
}

impl Currency {
    /// Build a descriptor. Crate-internal; the public constructors are
    /// [`ConfigurableCurrency::new`](crate::ConfigurableCurrency::new) and
    /// the baseline set in [`currencies`](crate::currencies).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
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
            data: Arc::new(CurrencyData {
                name: name.into(),
                code: code.into(),
                numeric_code,
                symbol: symbol.into(),
                fraction_symbol: fraction_symbol.into(),
                fractions_per_unit,
                rounding,
                format_string: format_string.into(),
            }),
        }
    }

    /// Full name (e.g. "Tunisian Dinar").
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// ISO 4217 alphabetic code (e.g. "TND").
    pub fn code(&self) -> &str {
        &self.data.code
    }

    /// ISO 4217 numeric code (e.g. 788).
    pub fn numeric_code(&self) -> Integer {
        self.data.numeric_code
    }

    /// Symbol of the major unit.
    pub fn symbol(&self) -> &str {
        &self.data.symbol
    }

    /// Symbol of the minor unit.
    pub fn fraction_symbol(&self) -> &str {
        &self.data.fraction_symbol
    }

    /// Number of minor units per major unit (e.g. 1000 millimes per dinar).
    pub fn fractions_per_unit(&self) -> Integer {
        self.data.fractions_per_unit
    }

    /// Rounding rule for amounts in this currency.
    pub fn rounding(&self) -> Rounding {
        self.data.rounding
    }

    /// Display format string.
    pub fn format_string(&self) -> &str {
        &self.data.format_string
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Currency")
            .field("code", &self.code())
            .field("numeric_code", &self.numeric_code())
            .field("fractions_per_unit", &self.fractions_per_unit())
            .field("rounding", &self.rounding())
            .finish()
    }
}

/// A monetary amount with an associated currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    /// Numeric value.
    pub value: Real,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new monetary amount.
    pub fn new(value: Real, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// This amount rounded with the currency's own rounding rule.
    pub fn rounded(&self) -> Money {
        Money::new(self.currency.rounding().round(self.value), self.currency.clone())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.rounding().precision().max(0) as usize;
        write!(f, "{:.decimals$} {}", self.value, self.currency.code())
    }
}
