//! Option payoffs.
//!
//! Only the plain vanilla payoff is modelled; the traits leave room for
//! other striked payoffs without touching the trade layer.

use rd_core::errors::{Error, Result};
use rd_core::Real;
use std::fmt;
use std::str::FromStr;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy.
    Call,
    /// Right to sell.
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Accepts `Call`/`C` and `Put`/`P`, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CALL" | "C" => Ok(OptionType::Call),
            "PUT" | "P" => Ok(OptionType::Put),
            _ => Err(Error::invalid_enum("OptionType", s, &["Call", "Put"])),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Terminal payoff as a function of the underlying price.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Payoff at `price`.
    fn value(&self, price: Real) -> Real;

    /// Short name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

/// A payoff with a strike and a call/put side.
pub trait StrikedPayoff: Payoff {
    /// The strike.
    fn strike(&self) -> Real;

    /// Call or put.
    fn option_type(&self) -> OptionType;
}

/// `max(φ(S − K), 0)` with `φ = +1` for a call and `−1` for a put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike, in major currency units.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// A new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

impl StrikedPayoff for PlainVanillaPayoff {
    fn strike(&self) -> Real {
        self.strike
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }
}
