//! Parsers for the scalar values found in configuration and trade documents.
//!
//! Each parser trims surrounding whitespace and reports [`Error::Parse`]
//! naming the offending text.

use crate::errors::{Error, Result};
use crate::{Integer, Real};

/// Parse a boolean flag.
///
/// Accepts `true/false`, `yes/no`, `y/n` and `1/0`, case-insensitive.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(Error::parse(format!("cannot convert '{s}' to bool"))),
    }
}

/// Parse a real number.
pub fn parse_real(s: &str) -> Result<Real> {
    s.trim()
        .parse::<Real>()
        .map_err(|_| Error::parse(format!("cannot convert '{s}' to Real")))
}

/// Parse a signed integer.
pub fn parse_integer(s: &str) -> Result<Integer> {
    s.trim()
        .parse::<Integer>()
        .map_err(|_| Error::parse(format!("cannot convert '{s}' to Integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" Y ").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("FALSE").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_parse_real() {
        assert_relative_eq!(parse_real("2147.56").unwrap(), 2147.56);
        assert_relative_eq!(parse_real(" -1e-3 ").unwrap(), -0.001);
        assert!(parse_real("ATMF").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("788").unwrap(), 788);
        assert!(parse_integer("7.5").is_err());
    }
}
