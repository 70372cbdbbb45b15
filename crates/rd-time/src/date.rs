//! Date parsing and formatting for documents.

use chrono::NaiveDate;
use rd_core::errors::{Error, Result};

/// Formats accepted by [`parse_date`], tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y%m%d", "%Y/%m/%d", "%Y.%m.%d", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y",
];

/// Parse a date written as `YYYY-MM-DD`, `YYYYMMDD`, `YYYY/MM/DD`,
/// `YYYY.MM.DD`, `DD/MM/YYYY`, `DD.MM.YYYY` or `DD-MM-YYYY`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| Error::parse(format!("cannot convert '{s}' to Date")))
}

/// Canonical document form of a date (`YYYY-MM-DD`).
pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
