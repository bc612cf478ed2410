//! Resampling frequencies.
//!
//! A [`ResamplePeriod`] knows how to enumerate its boundary dates ("keys") over
//! a date range and whether a given trading day belongs to the same period as a
//! key. Keys are calendar dates and need not be trading days:
//!
//! | period | key | anchored |
//! |---|---|---|
//! | `BM` | last weekday of each month | at the last trading day on/before the key |
//! | `BY` | last weekday of each year | at the last trading day on/before the key |
//! | `MS` | first calendar day of each month | at the first trading day on/after the key |

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::calendar::{last_business_day_of_month, month_index, month_start};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResamplePeriod {
    /// Business month end.
    BusinessMonthEnd,
    /// Business year end.
    BusinessYearEnd,
    /// Calendar month start.
    MonthStart,
}

#[derive(Debug, Error)]
#[error("unknown resample period: {0} (expected BM, BY or MS)")]
pub struct ParsePeriodError(pub String);

impl ResamplePeriod {
    /// `true` when points attach to the first trading day of the period rather
    /// than the last.
    pub const fn is_start_anchored(self) -> bool {
        matches!(self, ResamplePeriod::MonthStart)
    }

    /// Every key `k` with `first <= k <= last`, ascending.
    pub fn keys(self, first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
        if first > last {
            return Vec::new();
        }
        (month_index(first)..=month_index(last))
            .filter_map(|idx| match self {
                ResamplePeriod::BusinessMonthEnd => last_business_day_of_month(idx),
                ResamplePeriod::BusinessYearEnd if idx.rem_euclid(12) == 11 => {
                    last_business_day_of_month(idx)
                }
                ResamplePeriod::BusinessYearEnd => None,
                ResamplePeriod::MonthStart => month_start(idx),
            })
            .filter(|key| (first..=last).contains(key))
            .collect()
    }

    /// Whether `date` lies in the same calendar period as `key`.
    pub fn same_period(self, key: NaiveDate, date: NaiveDate) -> bool {
        match self {
            ResamplePeriod::BusinessMonthEnd | ResamplePeriod::MonthStart => {
                month_index(key) == month_index(date)
            }
            ResamplePeriod::BusinessYearEnd => key.year() == date.year(),
        }
    }
}

impl fmt::Display for ResamplePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResamplePeriod::BusinessMonthEnd => "BM",
            ResamplePeriod::BusinessYearEnd => "BY",
            ResamplePeriod::MonthStart => "MS",
        })
    }
}

impl FromStr for ResamplePeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "BM" => Ok(ResamplePeriod::BusinessMonthEnd),
            "BY" => Ok(ResamplePeriod::BusinessYearEnd),
            "MS" => Ok(ResamplePeriod::MonthStart),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}
