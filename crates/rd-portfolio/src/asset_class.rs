//! Asset classes of trade underlyings.

use rd_core::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Asset class of an underlying; also keys `underlying_indices` maps.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetClass {
    /// Equity.
    EQ,
    /// Foreign exchange.
    FX,
    /// Commodity.
    COM,
    /// Interest rate.
    IR,
    /// Inflation.
    INF,
    /// Credit.
    CR,
    /// Bond.
    BOND,
}

const TOKENS: &[&str] = &["EQ", "FX", "COM", "IR", "INF", "CR", "BOND"];

impl FromStr for AssetClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "EQ" | "Equity" => Ok(AssetClass::EQ),
            "FX" => Ok(AssetClass::FX),
            "COM" | "Commodity" => Ok(AssetClass::COM),
            "IR" => Ok(AssetClass::IR),
            "INF" | "Inflation" => Ok(AssetClass::INF),
            "CR" | "Credit" => Ok(AssetClass::CR),
            "BOND" | "Bond" => Ok(AssetClass::BOND),
            other => Err(Error::invalid_enum("AssetClass", other, TOKENS)),
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetClass::EQ => "EQ",
            AssetClass::FX => "FX",
            AssetClass::COM => "COM",
            AssetClass::IR => "IR",
            AssetClass::INF => "INF",
            AssetClass::CR => "CR",
            AssetClass::BOND => "BOND",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        for t in TOKENS {
            assert_eq!(t.parse::<AssetClass>().unwrap().to_string(), *t);
        }
        assert_eq!("Equity".parse::<AssetClass>().unwrap(), AssetClass::EQ);
        assert!("XX".parse::<AssetClass>().is_err());
    }
}
