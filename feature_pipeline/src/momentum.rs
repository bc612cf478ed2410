//! The 12-1 price momentum signal.
//!
//! For month `m` the signal is the return from the start of month `m - 12` to
//! the start of month `m - 1`. The most recent month is skipped, so the
//! current (possibly incomplete) month never feeds the value it is reported
//! on.

use chrono::NaiveDate;

use crate::{align::align_interpolate, period::ResamplePeriod, resample::resample};

/// Month-start momentum over `lookback` months, skipping the latest `skip`
/// months, broadcast onto `index`.
pub fn momentum(
    index: &[NaiveDate],
    closes: &[f64],
    lookback: usize,
    skip: usize,
) -> Vec<Option<f64>> {
    let sparse = resample(index, closes, ResamplePeriod::MonthStart)
        .ffill()
        .shift(skip)
        .pct_change(lookback);
    align_interpolate(&sparse, index)
}
