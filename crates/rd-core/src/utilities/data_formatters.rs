//! Formatting helpers used when writing documents.

use crate::Real;

/// Format a real number with the shortest text that parses back to the
/// identical value (e.g. `100.0` → `"100"`, `2147.56` → `"2147.56"`).
pub fn format_real(value: Real) -> String {
    format!("{value}")
}

/// Format a boolean flag as `"true"` or `"false"`.
pub fn format_bool(value: bool) -> String {
    let s = if value { "true" } else { "false" };
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::data_parsers::parse_real;

    #[test]
    fn test_format_real_is_exact() {
        assert_eq!(format_real(100.0), "100");
        assert_eq!(format_real(0.1), "0.1");
        for v in [2147.56, 1.0 / 3.0, -7.25e-9, 1e21] {
            assert_eq!(parse_real(&format_real(v)).unwrap(), v);
        }
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }
}
