//! Settlement of an exercised option.

use rd_core::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Cash or physical delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementType {
    /// Cash settled.
    Cash,
    /// Physical delivery of the underlying.
    Physical,
}

impl FromStr for SettlementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" | "c" => Ok(SettlementType::Cash),
            "physical" | "p" => Ok(SettlementType::Physical),
            _ => Err(Error::invalid_enum("Settlement", s, &["Cash", "Physical"])),
        }
    }
}

impl fmt::Display for SettlementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementType::Cash => write!(f, "Cash"),
            SettlementType::Physical => write!(f, "Physical"),
        }
    }
}
