//! Daily price analytics derived from a raw bar series.
//!
//! [`enrich`] takes a validated, ascending [`BarSeries`](market_data_ingestor::models::bar_series::BarSeries)
//! and returns an [`EnrichedSeries`]: the original bars plus daily, monthly and
//! yearly returns, daily log returns, annualized volatility, the 12-1 momentum
//! signal and 21/50/200-day moving averages, every column aligned to the input's
//! daily index.
//!
//! The low-frequency columns are built in two separate steps:
//! - [`resample::resample`] samples prices at period boundaries into a
//!   [`SparseSeries`](resample::SparseSeries), independent of any alignment;
//! - [`align::align_interpolate`] broadcasts a sparse series back onto the daily
//!   index and fills gaps by linear interpolation strictly between known points.
//!
//! Everything here is a pure function of its input: no I/O, no global state.

pub mod align;
pub mod calendar;
pub mod config;
pub mod enriched;
pub mod error;
pub mod export;
pub mod momentum;
pub mod period;
pub mod pipeline;
pub mod resample;
pub mod returns;
pub mod rolling;
pub mod selection;
pub mod validate;

pub use enriched::{Column, EnrichedSeries};
pub use error::{IntegrityError, PipelineError};
pub use pipeline::{enrich, enrich_with};
pub use selection::{ChartSelection, chart_data};
