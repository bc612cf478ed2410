use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ConfigError;

/// The input bar series violates an ordering or value precondition.
///
/// `row` is the zero-based position of the offending bar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrityError {
    #[error("row {row}: timestamp {current} is earlier than the previous timestamp {previous}")]
    NonAscending {
        row: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("row {row}: duplicate timestamp {date}")]
    DuplicateTimestamp { row: usize, date: NaiveDate },

    #[error("row {row} ({date}): adjusted close must be positive and finite, got {value}")]
    NonPositiveAdjustedClose {
        row: usize,
        date: NaiveDate,
        value: f64,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("bar series integrity: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("pipeline configuration: {0}")]
    Config(#[from] ConfigError),
}
