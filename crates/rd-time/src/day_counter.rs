//! Day-count conventions.
//!
//! A day counter computes the **day count fraction**, the fraction of a year
//! between two dates. Configuration documents refer to conventions by name;
//! [`parse_day_counter`] accepts the usual market aliases and
//! [`DayCounter::name`] yields the canonical name, which parses back to the
//! same convention.

use chrono::{Datelike, NaiveDate};
use rd_core::errors::{Error, Result};
use rd_core::Real;
use std::fmt;
use std::str::FromStr;

/// A convention for counting the fraction of a year between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCounter {
    /// `actual_days / 360`.
    Actual360,
    /// `actual_days / 364`.
    Actual364,
    /// `actual_days / 365`.
    Actual365Fixed,
    /// `actual_days / 365.25`.
    Actual36525,
    /// Actual/Actual, splitting the period at year boundaries.
    ActualActualIsda,
    /// 30/360 US bond basis.
    Thirty360,
    /// 30E/360 Eurobond basis.
    Thirty360European,
    /// Every period counts as one day and one year.
    OneDay,
}

/// Aliases accepted by the parser, upper-cased, per convention.
const ALIASES: &[(DayCounter, &[&str])] = &[
    (DayCounter::Actual360, &["A360", "ACTUAL/360", "ACT/360"]),
    (DayCounter::Actual364, &["A364", "ACTUAL/364", "ACT/364"]),
    (
        DayCounter::Actual365Fixed,
        &["A365", "A365F", "ACTUAL/365 (FIXED)", "ACT/365.FIXED", "ACT/365", "ACT/365L"],
    ),
    (DayCounter::Actual36525, &["ACTUAL/365.25", "ACT/365.25"]),
    (
        DayCounter::ActualActualIsda,
        &["ACTACTISDA", "ACTUAL/ACTUAL (ISDA)", "ACT/ACT.ISDA", "ACT/ACT", "ACT"],
    ),
    (
        DayCounter::Thirty360,
        &["T360", "30/360", "30/360 (BOND BASIS)", "ACT/NACT"],
    ),
    (
        DayCounter::Thirty360European,
        &["30E/360", "30E/360 (EUROBOND BASIS)", "THIRTY360E", "EUR 30/360"],
    ),
    (DayCounter::OneDay, &["1/1"]),
];

impl DayCounter {
    /// Canonical name of this convention.
    pub fn name(&self) -> &'static str {
        match self {
            DayCounter::Actual360 => "Actual/360",
            DayCounter::Actual364 => "Actual/364",
            DayCounter::Actual365Fixed => "Actual/365 (Fixed)",
            DayCounter::Actual36525 => "Actual/365.25",
            DayCounter::ActualActualIsda => "Actual/Actual (ISDA)",
            DayCounter::Thirty360 => "30/360 (Bond Basis)",
            DayCounter::Thirty360European => "30E/360 (Eurobond Basis)",
            DayCounter::OneDay => "1/1",
        }
    }

    /// Number of days between `d1` and `d2` according to this convention.
    pub fn day_count(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        match self {
            DayCounter::Thirty360 | DayCounter::Thirty360European => {
                let mut dd1 = d1.day() as i64;
                let mut dd2 = d2.day() as i64;
                if dd1 == 31 {
                    dd1 = 30;
                }
                if dd2 == 31 && (dd1 == 30 || *self == DayCounter::Thirty360European) {
                    dd2 = 30;
                }
                360 * (d2.year() - d1.year()) as i64
                    + 30 * (d2.month() as i64 - d1.month() as i64)
                    + (dd2 - dd1)
            }
            DayCounter::OneDay => {
                if d2 >= d1 {
                    1
                } else {
                    -1
                }
            }
            _ => (d2 - d1).num_days(),
        }
    }

    /// Fraction of a year between `d1` and `d2`.
    pub fn year_fraction(&self, d1: NaiveDate, d2: NaiveDate) -> Real {
        match self {
            DayCounter::Actual360 | DayCounter::Thirty360 | DayCounter::Thirty360European => {
                self.day_count(d1, d2) as Real / 360.0
            }
            DayCounter::Actual364 => self.day_count(d1, d2) as Real / 364.0,
            DayCounter::Actual365Fixed => self.day_count(d1, d2) as Real / 365.0,
            DayCounter::Actual36525 => self.day_count(d1, d2) as Real / 365.25,
            DayCounter::ActualActualIsda => actual_actual_isda(d1, d2),
            DayCounter::OneDay => self.day_count(d1, d2) as Real,
        }
    }
}

fn days_in_year(year: i32) -> Real {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    }
}

fn actual_actual_isda(d1: NaiveDate, d2: NaiveDate) -> Real {
    if d1 == d2 {
        return 0.0;
    }
    if d1 > d2 {
        return -actual_actual_isda(d2, d1);
    }
    let (y1, y2) = (d1.year(), d2.year());
    if y1 == y2 {
        return (d2 - d1).num_days() as Real / days_in_year(y1);
    }
    let mut sum = (y2 - y1 - 1) as Real;
    if let Some(next_jan1) = NaiveDate::from_ymd_opt(y1 + 1, 1, 1) {
        sum += (next_jan1 - d1).num_days() as Real / days_in_year(y1);
    }
    if let Some(last_jan1) = NaiveDate::from_ymd_opt(y2, 1, 1) {
        sum += (d2 - last_jan1).num_days() as Real / days_in_year(y2);
    }
    sum
}

/// Parse a day counter from its canonical name or a market alias
/// (case-insensitive).
///
/// # Errors
/// [`Error::UnknownConvention`] when no convention matches.
pub fn parse_day_counter(s: &str) -> Result<DayCounter> {
    let key = s.trim().to_ascii_uppercase();
    ALIASES
        .iter()
        .find(|(_, names)| names.contains(&key.as_str()))
        .map(|(dc, _)| *dc)
        .ok_or_else(|| Error::unknown_convention("day counter", s))
}

impl FromStr for DayCounter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_day_counter(s)
    }
}

impl fmt::Display for DayCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
