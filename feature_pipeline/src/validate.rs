//! Preconditions on the raw bar series.

use market_data_ingestor::models::bar::Bar;

use crate::error::IntegrityError;

/// Checks that timestamps strictly ascend and every adjusted close is a
/// positive finite number. Reports the first offending row.
pub fn validate_bars(bars: &[Bar]) -> Result<(), IntegrityError> {
    for (row, bar) in bars.iter().enumerate() {
        if let Some(prev) = row.checked_sub(1).map(|i| &bars[i]) {
            if bar.timestamp == prev.timestamp {
                return Err(IntegrityError::DuplicateTimestamp {
                    row,
                    date: bar.timestamp,
                });
            }
            if bar.timestamp < prev.timestamp {
                return Err(IntegrityError::NonAscending {
                    row,
                    previous: prev.timestamp,
                    current: bar.timestamp,
                });
            }
        }
        let value = bar.adjusted_close;
        if !(value.is_finite() && value > 0.0) {
            return Err(IntegrityError::NonPositiveAdjustedClose {
                row,
                date: bar.timestamp,
                value,
            });
        }
    }
    Ok(())
}
