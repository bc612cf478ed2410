#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, Weekday};
use market_data_ingestor::models::{bar::Bar, bar_series::BarSeries};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// The first `n` weekdays on or after `start`.
pub fn trading_days(start: NaiveDate, n: usize) -> Vec<NaiveDate> {
    start
        .iter_days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .take(n)
        .collect()
}

/// Weekdays from `start` through `end` inclusive.
pub fn trading_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// One flat bar per date, priced from `prices` in order.
pub fn series_from(symbol: &str, dates: &[NaiveDate], prices: &[f64]) -> BarSeries {
    assert_eq!(dates.len(), prices.len());
    let bars = dates
        .iter()
        .zip(prices)
        .map(|(d, p)| Bar::flat(*d, *p))
        .collect();
    BarSeries::new(symbol, bars)
}

/// `prices.len()` consecutive weekdays starting 2022-01-03.
pub fn weekday_series(prices: &[f64]) -> BarSeries {
    let dates = trading_days(date(2022, 1, 3), prices.len());
    series_from("TEST", &dates, prices)
}

pub fn defined(values: &[Option<f64>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}

pub fn first_defined(values: &[Option<f64>]) -> Option<usize> {
    values.iter().position(Option::is_some)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}
