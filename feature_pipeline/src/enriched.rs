//! The enriched series and its addressable columns.

use std::{borrow::Cow, fmt, str::FromStr};

use chrono::NaiveDate;
use market_data_ingestor::models::bar::Bar;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named column of an [`EnrichedSeries`].
///
/// [`Column::name`] is the stable external identifier (CSV headers, CLI
/// arguments); [`Column::label`] is the human-readable legend text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Column {
    Open,
    High,
    Low,
    Close,
    AdjustedClose,
    Volume,
    DailyReturn,
    MonthlyReturn,
    YearlyReturn,
    DailyLogReturn,
    AnnualizedVolatility,
    Momentum12_1,
    MovingAvg21,
    MovingAvg50,
    MovingAvg200,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column `{0}`")]
pub struct UnknownColumn(pub String);

impl Column {
    /// Every column in export order.
    pub const ALL: [Column; 15] = [
        Column::Open,
        Column::High,
        Column::Low,
        Column::Close,
        Column::AdjustedClose,
        Column::Volume,
        Column::DailyReturn,
        Column::MonthlyReturn,
        Column::YearlyReturn,
        Column::DailyLogReturn,
        Column::AnnualizedVolatility,
        Column::Momentum12_1,
        Column::MovingAvg21,
        Column::MovingAvg50,
        Column::MovingAvg200,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Column::Open => "open",
            Column::High => "high",
            Column::Low => "low",
            Column::Close => "close",
            Column::AdjustedClose => "adjusted_close",
            Column::Volume => "volume",
            Column::DailyReturn => "daily_return",
            Column::MonthlyReturn => "monthly_return",
            Column::YearlyReturn => "yearly_return",
            Column::DailyLogReturn => "daily_log_return",
            Column::AnnualizedVolatility => "annualized_volatility",
            Column::Momentum12_1 => "momentum_12_1",
            Column::MovingAvg21 => "moving_avg_21",
            Column::MovingAvg50 => "moving_avg_50",
            Column::MovingAvg200 => "moving_avg_200",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Column::Open => "Opening",
            Column::High => "Highest",
            Column::Low => "Lowest",
            Column::Close => "Closing",
            Column::AdjustedClose => "Adjusted closing",
            Column::Volume => "Volume",
            Column::DailyReturn => "Daily Returns",
            Column::MonthlyReturn => "Monthly Returns",
            Column::YearlyReturn => "Yearly Returns",
            Column::DailyLogReturn => "Daily Log Returns",
            Column::AnnualizedVolatility => "Annualized Volatility",
            Column::Momentum12_1 => "Daily 12-1 Price Momentum Signal",
            Column::MovingAvg21 => "21-day Moving Average",
            Column::MovingAvg50 => "50-day Moving Average",
            Column::MovingAvg200 => "200-day Moving Average",
        }
    }

    /// `true` for the columns copied straight from the bars.
    pub const fn is_raw(self) -> bool {
        matches!(
            self,
            Column::Open
                | Column::High
                | Column::Low
                | Column::Close
                | Column::AdjustedClose
                | Column::Volume
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

impl TryFrom<String> for Column {
    type Error = UnknownColumn;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Column> for String {
    fn from(c: Column) -> Self {
        c.name().to_string()
    }
}

/// The input bars plus every derived column, all of the input's length and in
/// its order. `None` marks a value that is undefined at that row.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSeries {
    symbol: String,
    bars: Vec<Bar>,
    pub(crate) daily_return: Vec<Option<f64>>,
    pub(crate) monthly_return: Vec<Option<f64>>,
    pub(crate) yearly_return: Vec<Option<f64>>,
    pub(crate) daily_log_return: Vec<Option<f64>>,
    pub(crate) annualized_volatility: Vec<Option<f64>>,
    pub(crate) momentum_12_1: Vec<Option<f64>>,
    pub(crate) moving_avg_21: Vec<Option<f64>>,
    pub(crate) moving_avg_50: Vec<Option<f64>>,
    pub(crate) moving_avg_200: Vec<Option<f64>>,
}

impl EnrichedSeries {
    /// Series with every derived column undefined.
    pub(crate) fn undefined(symbol: String, bars: Vec<Bar>) -> Self {
        let none = vec![None; bars.len()];
        Self {
            symbol,
            daily_return: none.clone(),
            monthly_return: none.clone(),
            yearly_return: none.clone(),
            daily_log_return: none.clone(),
            annualized_volatility: none.clone(),
            momentum_12_1: none.clone(),
            moving_avg_21: none.clone(),
            moving_avg_50: none.clone(),
            moving_avg_200: none,
            bars,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    /// Values of `column`, one per row. Raw columns are always defined.
    pub fn column(&self, column: Column) -> Cow<'_, [Option<f64>]> {
        match column {
            Column::Open => self.raw(|b| b.open),
            Column::High => self.raw(|b| b.high),
            Column::Low => self.raw(|b| b.low),
            Column::Close => self.raw(|b| b.close),
            Column::AdjustedClose => self.raw(|b| b.adjusted_close),
            Column::Volume => self.raw(|b| b.volume as f64),
            Column::DailyReturn => Cow::Borrowed(self.daily_return.as_slice()),
            Column::MonthlyReturn => Cow::Borrowed(self.monthly_return.as_slice()),
            Column::YearlyReturn => Cow::Borrowed(self.yearly_return.as_slice()),
            Column::DailyLogReturn => Cow::Borrowed(self.daily_log_return.as_slice()),
            Column::AnnualizedVolatility => Cow::Borrowed(self.annualized_volatility.as_slice()),
            Column::Momentum12_1 => Cow::Borrowed(self.momentum_12_1.as_slice()),
            Column::MovingAvg21 => Cow::Borrowed(self.moving_avg_21.as_slice()),
            Column::MovingAvg50 => Cow::Borrowed(self.moving_avg_50.as_slice()),
            Column::MovingAvg200 => Cow::Borrowed(self.moving_avg_200.as_slice()),
        }
    }

    fn raw(&self, field: fn(&Bar) -> f64) -> Cow<'_, [Option<f64>]> {
        Cow::Owned(self.bars.iter().map(|b| Some(field(b))).collect())
    }

    /// Single cell lookup. `None` if the row is out of range or undefined.
    pub fn value(&self, column: Column, row: usize) -> Option<f64> {
        let bar = self.bars.get(row)?;
        let derived = match column {
            Column::Open => return Some(bar.open),
            Column::High => return Some(bar.high),
            Column::Low => return Some(bar.low),
            Column::Close => return Some(bar.close),
            Column::AdjustedClose => return Some(bar.adjusted_close),
            Column::Volume => return Some(bar.volume as f64),
            Column::DailyReturn => &self.daily_return,
            Column::MonthlyReturn => &self.monthly_return,
            Column::YearlyReturn => &self.yearly_return,
            Column::DailyLogReturn => &self.daily_log_return,
            Column::AnnualizedVolatility => &self.annualized_volatility,
            Column::Momentum12_1 => &self.momentum_12_1,
            Column::MovingAvg21 => &self.moving_avg_21,
            Column::MovingAvg50 => &self.moving_avg_50,
            Column::MovingAvg200 => &self.moving_avg_200,
        };
        derived.get(row).copied().flatten()
    }

    /// Column lookup by external name.
    pub fn get(&self, name: &str) -> Result<Cow<'_, [Option<f64>]>, UnknownColumn> {
        Ok(self.column(name.parse()?))
    }
}
