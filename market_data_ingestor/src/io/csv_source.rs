//! Reading bar series from daily-adjusted CSV.
//!
//! The expected header is the one the Alpha Vantage `TIME_SERIES_DAILY_ADJUSTED`
//! endpoint emits:
//!
//! ```text
//! timestamp,open,high,low,close,adjusted_close,volume,dividend_amount,split_coefficient
//! ```
//!
//! `dividend_amount` and `split_coefficient` may be absent. The feed lists the
//! newest day first, so a strictly descending file is reversed; any other order
//! is returned untouched and left for the pipeline's validation to reject.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{bar::Bar, bar_series::BarSeries};

/// Errors raised while reading a CSV bar source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened.
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed (csv reports the position).
    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct CsvBar {
    #[serde(alias = "date", alias = "Date")]
    timestamp: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(alias = "adj_close", alias = "Adj Close")]
    adjusted_close: f64,
    volume: u64,
    #[serde(default)]
    dividend_amount: Option<f64>,
    #[serde(default)]
    split_coefficient: Option<f64>,
}

impl From<CsvBar> for Bar {
    fn from(row: CsvBar) -> Self {
        Bar {
            timestamp: row.timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            adjusted_close: row.adjusted_close,
            volume: row.volume,
            dividend_amount: row.dividend_amount,
            split_coefficient: row.split_coefficient,
        }
    }
}

/// Parse daily-adjusted CSV from any reader into a [`BarSeries`].
pub fn parse_daily_csv<R: Read>(reader: R, symbol: &str) -> Result<BarSeries, SourceError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut bars = Vec::new();
    for row in rdr.deserialize::<CsvBar>() {
        bars.push(Bar::from(row?));
    }
    Ok(BarSeries::new(symbol, into_ascending(symbol, bars)))
}

/// Open `path` and parse it with [`parse_daily_csv`].
pub fn read_csv_file(path: impl AsRef<Path>, symbol: &str) -> Result<BarSeries, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_daily_csv(file, symbol)?;
    debug!(symbol, rows = series.len(), file = %path.display(), "loaded bars from CSV");
    Ok(series)
}

fn into_ascending(symbol: &str, mut bars: Vec<Bar>) -> Vec<Bar> {
    if bars.len() < 2 || bars.windows(2).all(|w| w[0].timestamp < w[1].timestamp) {
        return bars;
    }
    if bars.windows(2).all(|w| w[0].timestamp > w[1].timestamp) {
        bars.reverse();
    } else {
        warn!(symbol, "bars are neither strictly ascending nor strictly descending");
    }
    bars
}
