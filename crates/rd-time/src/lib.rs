//! # rd-time
//!
//! Day-count conventions and date parsing.
//!
//! Dates are [`chrono::NaiveDate`]; this crate adds the document-facing
//! parsers and the [`DayCounter`] value type read by curve configurations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Date parsing and formatting.
pub mod date;

/// `DayCounter` and its name parser.
pub mod day_counter;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use chrono::NaiveDate as Date;
pub use date::{format_date, parse_date};
pub use day_counter::{parse_day_counter, DayCounter};
