//! Canonical in-memory representation of one trading day (OHLCV).
//!
//! This struct is the standard output of every [`DataProvider`](crate::providers::DataProvider)
//! and of the CSV source in [`crate::io`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily bar.
///
/// `adjusted_close` is the dividend/split adjusted closing price; every return
/// computed downstream uses it rather than `close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading day this bar covers.
    pub timestamp: NaiveDate,

    /// Opening price.
    pub open: f64,

    /// Highest price during the day.
    pub high: f64,

    /// Lowest price during the day.
    pub low: f64,

    /// Raw closing price.
    pub close: f64,

    /// Closing price adjusted for dividends and splits.
    pub adjusted_close: f64,

    /// Shares traded.
    pub volume: u64,

    /// Cash dividend paid on this day. Not all sources supply this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_amount: Option<f64>,

    /// Split ratio effective on this day (1.0 when none). Not all sources supply this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_coefficient: Option<f64>,
}

impl Bar {
    /// Bar with every price set to `price`, no volume and no corporate action data.
    #[cfg(any(test, feature = "test-util"))]
    pub fn flat(timestamp: NaiveDate, price: f64) -> Self {
        Self {
            timestamp,
            open: price,
            high: price,
            low: price,
            close: price,
            adjusted_close: price,
            volume: 0,
            dividend_amount: None,
            split_coefficient: None,
        }
    }
}
