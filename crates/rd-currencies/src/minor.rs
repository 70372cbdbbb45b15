//! Minor currency units.
//!
//! Equity prices are often quoted in a currency's minor unit (pence,
//! cents, agorot). These codes are not currencies in their own right; they
//! map to a major currency and scale by its fractions per unit.

use crate::currencies::baseline_currency;
use rd_core::Real;

const MINOR_CODES: &[(&str, &str)] = &[
    ("GBp", "GBP"),
    ("GBX", "GBP"),
    ("ZAc", "ZAR"),
    ("ZAC", "ZAR"),
    ("ZAX", "ZAR"),
    ("ILa", "ILS"),
    ("ILA", "ILS"),
    ("ILs", "ILS"),
    ("ILX", "ILS"),
    ("KWf", "KWD"),
    ("KWF", "KWD"),
];

/// Whether `code` names a minor unit.
pub fn is_minor_currency(code: &str) -> bool {
    MINOR_CODES.iter().any(|(minor, _)| *minor == code)
}

/// The major currency code for `code`; major codes map to themselves.
pub fn major_currency_code(code: &str) -> &str {
    MINOR_CODES
        .iter()
        .find(|(minor, _)| *minor == code)
        .map_or(code, |(_, major)| *major)
}

/// Express `value`, quoted in `code`, in major units.
///
/// Values in a major (or unknown) currency are returned unchanged.
pub fn convert_minor_to_major_currency(code: &str, value: Real) -> Real {
    if !is_minor_currency(code) {
        return value;
    }
    match baseline_currency(major_currency_code(code)) {
        Some(major) => value / major.fractions_per_unit() as Real,
        None => value,
    }
}
