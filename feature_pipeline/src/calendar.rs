//! Calendar arithmetic for period boundaries.
//!
//! - Months are addressed by a linear index `year * 12 + (month - 1)`, so
//!   iterating a date range month by month is plain integer iteration.
//! - A business day is Monday through Friday. Exchange holidays are not
//!   modelled here; resampling falls back to the last trading day actually
//!   present in the data when a business boundary is a holiday.

use chrono::{Datelike, NaiveDate, Weekday};

/// Linear month index of `date`.
pub fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + (date.month0() as i64)
}

/// First calendar day of the month with linear index `idx`.
pub fn month_start(idx: i64) -> Option<NaiveDate> {
    let year = i32::try_from(idx.div_euclid(12)).ok()?;
    let month = idx.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Last calendar day of the month with linear index `idx`.
pub fn month_end(idx: i64) -> Option<NaiveDate> {
    month_start(idx + 1)?.pred_opt()
}

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Last weekday of the month with linear index `idx`.
pub fn last_business_day_of_month(idx: i64) -> Option<NaiveDate> {
    let mut day = month_end(idx)?;
    while !is_business_day(day) {
        day = day.pred_opt()?;
    }
    Some(day)
}

/// Last weekday of `year`.
pub fn last_business_day_of_year(year: i32) -> Option<NaiveDate> {
    last_business_day_of_month(year as i64 * 12 + 11)
}
