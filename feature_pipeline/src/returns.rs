//! Return series derived from adjusted closing prices.

use chrono::NaiveDate;

use crate::{
    align::align_interpolate,
    period::ResamplePeriod,
    resample::resample,
    rolling::rolling_std,
};

/// Simple daily returns, `p[t] / p[t-1] - 1`. Row 0 is undefined.
pub fn daily_returns(closes: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(closes.len());
    if closes.is_empty() {
        return out;
    }
    out.push(None);
    out.extend(closes.windows(2).map(|w| Some(w[1] / w[0] - 1.0)));
    out
}

/// `ln(1 + r)` for every defined daily return.
pub fn log_returns(daily: &[Option<f64>]) -> Vec<Option<f64>> {
    daily.iter().map(|r| r.map(f64::ln_1p)).collect()
}

/// Period-over-period returns sampled at `period` boundaries and broadcast
/// back onto `index` with interior-only interpolation.
pub fn periodic_returns(
    index: &[NaiveDate],
    closes: &[f64],
    period: ResamplePeriod,
) -> Vec<Option<f64>> {
    let sparse = resample(index, closes, period).pct_change(1);
    align_interpolate(&sparse, index)
}

/// Trailing sample standard deviation of `log_returns` over `window` rows,
/// scaled by `sqrt(periods_per_year)`.
pub fn annualized_volatility(
    log_returns: &[Option<f64>],
    window: usize,
    periods_per_year: f64,
) -> Vec<Option<f64>> {
    let scale = periods_per_year.sqrt();
    rolling_std(log_returns, window)
        .into_iter()
        .map(|s| s.map(|s| s * scale))
        .collect()
}
