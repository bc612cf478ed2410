//! Projection of an [`EnrichedSeries`] onto the columns a caller asked to plot.
//!
//! Selection is positional, the way a checkbox form submits it: four price
//! flags, five analysis flags and, optionally, three moving-average overlays
//! drawn on the price panel. Deselected columns do not appear in the
//! resulting [`ChartData`] at all.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::enriched::{Column, EnrichedSeries, UnknownColumn};

pub const PRICE_COLUMNS: [Column; 4] = [
    Column::Open,
    Column::High,
    Column::Low,
    Column::AdjustedClose,
];

pub const ANALYSIS_COLUMNS: [Column; 5] = [
    Column::DailyReturn,
    Column::MonthlyReturn,
    Column::YearlyReturn,
    Column::AnnualizedVolatility,
    Column::Momentum12_1,
];

pub const OVERLAY_COLUMNS: [Column; 3] = [
    Column::MovingAvg21,
    Column::MovingAvg50,
    Column::MovingAvg200,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("expected {expected} {group} flags, got {got}")]
    FlagCount {
        group: &'static str,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumn),

    #[error("column `{0}` cannot be plotted")]
    NotPlottable(Column),
}

/// Which series to draw. Passed per call; nothing is remembered between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartSelection {
    pub price: [bool; 4],
    pub analysis: [bool; 5],
    pub overlays: [bool; 3],
}

impl ChartSelection {
    /// Selection from positional form flags, without overlays.
    pub fn from_flags(price: &[bool], analysis: &[bool]) -> Result<Self, SelectionError> {
        Ok(Self {
            price: fixed(price, "price")?,
            analysis: fixed(analysis, "analysis")?,
            overlays: [false; 3],
        })
    }

    pub fn with_overlays(mut self, overlays: &[bool]) -> Result<Self, SelectionError> {
        self.overlays = fixed(overlays, "overlay")?;
        Ok(self)
    }

    /// Selection naming the columns to draw. Columns outside the price,
    /// analysis and overlay groups are rejected.
    pub fn from_columns(columns: &[Column]) -> Result<Self, SelectionError> {
        let mut sel = Self::default();
        for &c in columns {
            if let Some(i) = PRICE_COLUMNS.iter().position(|p| *p == c) {
                sel.price[i] = true;
            } else if let Some(i) = ANALYSIS_COLUMNS.iter().position(|p| *p == c) {
                sel.analysis[i] = true;
            } else if let Some(i) = OVERLAY_COLUMNS.iter().position(|p| *p == c) {
                sel.overlays[i] = true;
            } else {
                return Err(SelectionError::NotPlottable(c));
            }
        }
        Ok(sel)
    }

    /// [`from_columns`](Self::from_columns) over external column names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SelectionError> {
        let columns = names
            .iter()
            .map(|n| n.as_ref().parse::<Column>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_columns(&columns)
    }

    pub fn all() -> Self {
        Self {
            price: [true; 4],
            analysis: [true; 5],
            overlays: [true; 3],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected_columns().is_empty()
    }

    /// Selected columns in panel order: prices, overlays, then analysis.
    pub fn selected_columns(&self) -> Vec<Column> {
        pick(&PRICE_COLUMNS, &self.price)
            .chain(pick(&OVERLAY_COLUMNS, &self.overlays))
            .chain(pick(&ANALYSIS_COLUMNS, &self.analysis))
            .collect()
    }
}

fn fixed<const N: usize>(flags: &[bool], group: &'static str) -> Result<[bool; N], SelectionError> {
    flags.try_into().map_err(|_| SelectionError::FlagCount {
        group,
        expected: N,
        got: flags.len(),
    })
}

fn pick<'a>(columns: &'a [Column], flags: &'a [bool]) -> impl Iterator<Item = Column> + 'a {
    columns
        .iter()
        .zip(flags)
        .filter(|(_, on)| **on)
        .map(|(c, _)| *c)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub column: Column,
    pub label: &'static str,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub y_label: Option<&'static str>,
    pub series: Vec<ChartSeries>,
}

/// Everything a renderer needs: the shared x axis and two panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub timestamps: Vec<NaiveDate>,
    pub prices: ChartPanel,
    pub analysis: ChartPanel,
}

pub fn chart_data(series: &EnrichedSeries, selection: &ChartSelection) -> ChartData {
    let to_series = |c: Column| ChartSeries {
        column: c,
        label: c.label(),
        values: series.column(c).into_owned(),
    };
    let symbol = series.symbol();

    ChartData {
        timestamps: series.timestamps(),
        prices: ChartPanel {
            title: format!("{symbol}'s Historical prices"),
            y_label: Some("Price ($)"),
            series: pick(&PRICE_COLUMNS, &selection.price)
                .chain(pick(&OVERLAY_COLUMNS, &selection.overlays))
                .map(to_series)
                .collect(),
        },
        analysis: ChartPanel {
            title: format!("{symbol}'s Analysis"),
            y_label: None,
            series: pick(&ANALYSIS_COLUMNS, &selection.analysis)
                .map(to_series)
                .collect(),
        },
    }
}
