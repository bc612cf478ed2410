//! A collection of daily bars for one symbol.

use chrono::NaiveDate;

use crate::models::bar::Bar;

/// The raw bar series for a single symbol.
///
/// Sources hand these out in ascending date order, one bar per trading day.
/// Nothing here enforces that; the feature pipeline validates it before use.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL").
    pub symbol: String,
    /// The bars, oldest first.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The daily index, in bar order.
    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    /// Adjusted closing prices, in bar order.
    pub fn adjusted_closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.adjusted_close).collect()
    }

    /// First and last timestamps, if any bars exist.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.bars.first()?.timestamp, self.bars.last()?.timestamp))
    }
}
