//! Long/short position of a trade.

use crate::errors::{Error, Result};
use std::str::FromStr;

/// Long or short position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Long position (buyer).
    Long,
    /// Short position (seller).
    Short,
}

impl Position {
    /// Return the sign (+1 for Long, -1 for Short).
    pub fn sign(&self) -> f64 {
        match self {
            Position::Long => 1.0,
            Position::Short => -1.0,
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Accepts `Long`/`L` and `Short`/`S`, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LONG" | "L" => Ok(Position::Long),
            "SHORT" | "S" => Ok(Position::Short),
            _ => Err(Error::invalid_enum("LongShort", s, &["Long", "Short"])),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Long => write!(f, "Long"),
            Position::Short => write!(f, "Short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("Long".parse::<Position>().unwrap(), Position::Long);
        assert_eq!("s".parse::<Position>().unwrap(), Position::Short);
        assert!(matches!(
            "Flat".parse::<Position>(),
            Err(Error::InvalidEnum { .. })
        ));
    }

    #[test]
    fn display_round_trips() {
        for p in [Position::Long, Position::Short] {
            assert_eq!(p.to_string().parse::<Position>().unwrap(), p);
        }
    }
}
