//! Rounding conventions attached to currencies.

use rd_core::errors::{Error, Result};
use rd_core::{Integer, Real};
use std::fmt;
use std::str::FromStr;

/// How the discarded fraction is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingType {
    /// Return the value unchanged.
    #[default]
    None,
    /// Round away from zero.
    Up,
    /// Truncate towards zero.
    Down,
    /// Round to nearest; the fraction rounds away from zero once its first
    /// discarded digit reaches `digit`.
    Closest,
    /// Positive values round to closest, negative values are truncated.
    Floor,
    /// Negative values round to closest, positive values are truncated.
    Ceiling,
}

const ROUNDING_TYPES: &[&str] = &["None", "Up", "Down", "Closest", "Floor", "Ceiling"];

impl FromStr for RoundingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "None" => Ok(RoundingType::None),
            "Up" => Ok(RoundingType::Up),
            "Down" => Ok(RoundingType::Down),
            "Closest" => Ok(RoundingType::Closest),
            "Floor" => Ok(RoundingType::Floor),
            "Ceiling" => Ok(RoundingType::Ceiling),
            _ => Err(Error::invalid_enum("RoundingType", s, ROUNDING_TYPES)),
        }
    }
}

impl fmt::Display for RoundingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundingType::None => "None",
            RoundingType::Up => "Up",
            RoundingType::Down => "Down",
            RoundingType::Closest => "Closest",
            RoundingType::Floor => "Floor",
            RoundingType::Ceiling => "Ceiling",
        };
        f.write_str(s)
    }
}

/// A rounding rule: type, number of decimal places, and threshold digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounding {
    rounding_type: RoundingType,
    precision: Integer,
    digit: Integer,
}

impl Default for Rounding {
    fn default() -> Self {
        Self::none()
    }
}

impl Rounding {
    /// Rounding with an explicit threshold digit.
    pub fn new(rounding_type: RoundingType, precision: Integer, digit: Integer) -> Self {
        Self {
            rounding_type,
            precision,
            digit,
        }
    }

    /// Rounding with the standard threshold digit 5.
    pub fn with_precision(rounding_type: RoundingType, precision: Integer) -> Self {
        Self::new(rounding_type, precision, 5)
    }

    /// No rounding.
    pub fn none() -> Self {
        Self::new(RoundingType::None, 0, 5)
    }

    /// Round-to-closest with `precision` decimals.
    pub fn closest(precision: Integer) -> Self {
        Self::with_precision(RoundingType::Closest, precision)
    }

    /// The rounding type.
    pub fn rounding_type(&self) -> RoundingType {
        self.rounding_type
    }

    /// Number of decimal places kept.
    pub fn precision(&self) -> Integer {
        self.precision
    }

    /// Threshold digit.
    pub fn digit(&self) -> Integer {
        self.digit
    }

    /// Round `value` according to this rule.
    pub fn round(&self, value: Real) -> Real {
        if self.rounding_type == RoundingType::None {
            return value;
        }
        let mult = 10_f64.powi(self.precision);
        let neg = value < 0.0;
        let scaled = value.abs() * mult;
        let integral = scaled.trunc();
        let fraction = scaled - integral;
        let threshold = self.digit as Real / 10.0;
        let bump = match self.rounding_type {
            RoundingType::None | RoundingType::Down => false,
            RoundingType::Up => fraction != 0.0,
            RoundingType::Closest => fraction >= threshold,
            RoundingType::Floor => !neg && fraction >= threshold,
            RoundingType::Ceiling => neg && fraction >= threshold,
        };
        let rounded = (if bump { integral + 1.0 } else { integral }) / mult;
        if neg {
            -rounded
        } else {
            rounded
        }
    }
}
