//! Strike as written on the trade.

use rd_core::utilities::{format_real, parse_real};
use rd_core::Real;
use std::fmt;

/// The strike text of a trade.
///
/// Text that parses as a real is a numeric strike. Anything else (a formula
/// or a market reference resolved later) is a deferred strike: it survives
/// serialization verbatim but cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TradeStrike {
    text: String,
}

impl TradeStrike {
    /// A strike from its raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }

    /// A numeric strike.
    pub fn from_value(value: Real) -> Self {
        Self {
            text: format_real(value),
        }
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The numeric value, when the text is a number.
    pub fn value(&self) -> Option<Real> {
        parse_real(&self.text).ok()
    }

    /// Whether the strike is not a plain number.
    pub fn is_deferred(&self) -> bool {
        self.value().is_none()
    }
}

impl fmt::Display for TradeStrike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Real> for TradeStrike {
    fn from(value: Real) -> Self {
        Self::from_value(value)
    }
}

impl From<&str> for TradeStrike {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
