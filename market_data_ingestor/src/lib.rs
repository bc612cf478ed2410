//! Raw daily bar models and the collaborators that produce them.
//!
//! - [`models`]: the canonical [`Bar`](models::bar::Bar) and
//!   [`BarSeries`](models::bar_series::BarSeries) types consumed by the
//!   feature pipeline.
//! - [`providers`]: the [`DataProvider`](providers::DataProvider) trait and the
//!   Alpha Vantage daily-adjusted implementation.
//! - [`io`]: reading bar series from daily-adjusted CSV text or files.
//! - [`errors`]: one [`Error`](errors::Error) wrapping all of the above.

pub mod errors;
pub mod io;
pub mod models;
pub mod providers;
