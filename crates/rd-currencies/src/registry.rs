//! `CurrencyRegistry` — the active currency universe.

use crate::currencies::baseline_currencies;
use crate::currency::Currency;
use crate::minor::{is_minor_currency, major_currency_code};
use rd_core::errors::{Error, Result};
use rd_core::Integer;
use std::collections::BTreeMap;
use tracing::debug;

/// Currencies known to a loader, keyed by ISO code.
///
/// Both the alphabetic and the numeric code must be unique across the
/// registry; adding a currency that collides with either is rejected.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    by_code: BTreeMap<String, Currency>,
}

impl CurrencyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the baseline set.
    pub fn with_baseline() -> Self {
        let by_code = baseline_currencies()
            .into_iter()
            .map(|c| (c.code().to_string(), c))
            .collect();
        Self { by_code }
    }

    /// Register `currency`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] when its code or numeric code is taken.
    pub fn add(&mut self, currency: impl Into<Currency>) -> Result<()> {
        let currency = currency.into();
        if self.by_code.contains_key(currency.code()) {
            return Err(Error::InvalidArgument(format!(
                "currency code {} is already registered",
                currency.code()
            )));
        }
        if let Some(clash) = self.by_numeric_code(currency.numeric_code()) {
            return Err(Error::InvalidArgument(format!(
                "numeric code {} of {} is already used by {}",
                currency.numeric_code(),
                currency.code(),
                clash.code()
            )));
        }
        debug!(code = currency.code(), numeric_code = currency.numeric_code(), "registered currency");
        self.by_code.insert(currency.code().to_string(), currency);
        Ok(())
    }

    /// Look up by ISO code.
    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.by_code.get(code)
    }

    /// Look up by numeric code.
    pub fn by_numeric_code(&self, numeric_code: Integer) -> Option<&Currency> {
        self.by_code.values().find(|c| c.numeric_code() == numeric_code)
    }

    /// Parse an ISO code.
    ///
    /// # Errors
    /// [`Error::UnknownConvention`] for codes not in the registry.
    pub fn parse(&self, code: &str) -> Result<Currency> {
        self.get(code.trim())
            .cloned()
            .ok_or_else(|| Error::unknown_convention("currency", code))
    }

    /// Parse an ISO code or a minor-unit code, returning the major currency.
    pub fn parse_with_minors(&self, code: &str) -> Result<Currency> {
        let code = code.trim();
        if is_minor_currency(code) {
            self.parse(major_currency_code(code))
        } else {
            self.parse(code)
        }
    }

    /// Number of registered currencies.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
