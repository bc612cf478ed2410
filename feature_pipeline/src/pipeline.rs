//! The end-to-end feature computation.

use market_data_ingestor::models::bar_series::BarSeries;
use tracing::{debug, instrument};

use crate::{
    config::PipelineConfig,
    enriched::EnrichedSeries,
    error::PipelineError,
    momentum::momentum,
    period::ResamplePeriod,
    returns::{annualized_volatility, daily_returns, log_returns, periodic_returns},
    rolling::rolling_mean,
    validate::validate_bars,
};

/// Moving average windows, in trading days. Fixed because the column names
/// carry them.
pub const MOVING_AVERAGE_WINDOWS: [usize; 3] = [21, 50, 200];

/// Months between the two momentum prices.
pub const MOMENTUM_LOOKBACK: usize = 11;

/// Most recent months left out of the momentum signal. Must stay at least one
/// so the current month never feeds its own value.
pub const MOMENTUM_SKIP: usize = 1;

/// [`enrich_with`] using [`PipelineConfig::default`].
pub fn enrich(series: &BarSeries) -> Result<EnrichedSeries, PipelineError> {
    enrich_with(series, &PipelineConfig::default())
}

/// Validates `series` and derives every analytic column from its adjusted
/// closes. The input is only read.
///
/// Fewer than two bars is not an error: the result simply has every derived
/// value undefined. Likewise each windowed column stays undefined until
/// enough history has accumulated.
#[instrument(skip_all, fields(symbol = %series.symbol, rows = series.len()))]
pub fn enrich_with(
    series: &BarSeries,
    config: &PipelineConfig,
) -> Result<EnrichedSeries, PipelineError> {
    config.validate()?;
    validate_bars(&series.bars)?;

    let mut out = EnrichedSeries::undefined(series.symbol.clone(), series.bars.clone());
    if series.len() < 2 {
        debug!("fewer than two bars; every derived column is undefined");
        return Ok(out);
    }

    let index = series.timestamps();
    let closes = series.adjusted_closes();

    out.daily_return = daily_returns(&closes);
    out.monthly_return = periodic_returns(&index, &closes, ResamplePeriod::BusinessMonthEnd);
    out.yearly_return = periodic_returns(&index, &closes, ResamplePeriod::BusinessYearEnd);
    debug!(
        monthly = defined(&out.monthly_return),
        yearly = defined(&out.yearly_return),
        "returns computed"
    );

    out.daily_log_return = log_returns(&out.daily_return);
    out.annualized_volatility = annualized_volatility(
        &out.daily_log_return,
        config.volatility_window,
        config.annualization_periods,
    );
    debug!(
        defined = defined(&out.annualized_volatility),
        "volatility computed"
    );

    out.momentum_12_1 = momentum(&index, &closes, MOMENTUM_LOOKBACK, MOMENTUM_SKIP);
    debug!(defined = defined(&out.momentum_12_1), "momentum computed");

    let dense: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();
    let [short, medium, long] = MOVING_AVERAGE_WINDOWS;
    out.moving_avg_21 = rolling_mean(&dense, short);
    out.moving_avg_50 = rolling_mean(&dense, medium);
    out.moving_avg_200 = rolling_mean(&dense, long);

    Ok(out)
}

fn defined(values: &[Option<f64>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}
