//! Exercise styles and schedules.

use rd_core::errors::{Error, Result};
use rd_core::{ensure, fail};
use rd_time::Date;
use std::fmt;
use std::str::FromStr;

/// When an option may be exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExerciseType {
    /// Only at expiry.
    European,
    /// Any time up to expiry.
    American,
    /// On listed dates.
    Bermudan,
}

impl FromStr for ExerciseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "European" => Ok(ExerciseType::European),
            "American" => Ok(ExerciseType::American),
            "Bermudan" => Ok(ExerciseType::Bermudan),
            other => Err(Error::invalid_enum(
                "Style",
                other,
                &["European", "American", "Bermudan"],
            )),
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExerciseType::European => "European",
            ExerciseType::American => "American",
            ExerciseType::Bermudan => "Bermudan",
        };
        f.write_str(s)
    }
}

/// An exercise right with its dates. Never empty.
///
/// - European: the expiry.
/// - American: earliest and latest exercise date.
/// - Bermudan: sorted, de-duplicated exercise dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    exercise_type: ExerciseType,
    dates: Vec<Date>,
}

impl Exercise {
    /// Exercise at `expiry` only.
    pub fn european(expiry: Date) -> Self {
        Self {
            exercise_type: ExerciseType::European,
            dates: vec![expiry],
        }
    }

    /// Exercise any time in `[earliest, latest]`.
    pub fn american(earliest: Date, latest: Date) -> Result<Self> {
        ensure!(
            earliest <= latest,
            "American exercise window {earliest} .. {latest} is inverted"
        );
        Ok(Self {
            exercise_type: ExerciseType::American,
            dates: vec![earliest, latest],
        })
    }

    /// Exercise on each of `dates`.
    pub fn bermudan(mut dates: Vec<Date>) -> Result<Self> {
        ensure!(!dates.is_empty(), "Bermudan exercise needs at least one date");
        dates.sort();
        dates.dedup();
        Ok(Self {
            exercise_type: ExerciseType::Bermudan,
            dates,
        })
    }

    /// Build an exercise of `style` from the dates listed on a trade.
    ///
    /// A single American date is read as exercise from `earliest` (when
    /// given) up to that date.
    pub fn from_dates(style: ExerciseType, dates: &[Date], earliest: Option<Date>) -> Result<Self> {
        let last = match dates.iter().max() {
            Some(d) => *d,
            None => fail!("{style} exercise needs at least one exercise date"),
        };
        match style {
            ExerciseType::European => {
                ensure!(
                    dates.len() == 1,
                    "European exercise takes one date, got {}",
                    dates.len()
                );
                Ok(Self::european(last))
            }
            ExerciseType::American => {
                let first = match (dates.len(), earliest) {
                    (1, Some(e)) => e,
                    _ => *dates.iter().min().unwrap_or(&last),
                };
                Self::american(first, last)
            }
            ExerciseType::Bermudan => Self::bermudan(dates.to_vec()),
        }
    }

    /// The style.
    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }

    /// All dates, ascending.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The last exercise date.
    pub fn last_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exercise_type {
            ExerciseType::European => write!(f, "European({})", self.dates[0]),
            ExerciseType::American => {
                write!(f, "American({} .. {})", self.dates[0], self.last_date())
            }
            ExerciseType::Bermudan => write!(f, "Bermudan({} dates)", self.dates.len()),
        }
    }
}
