//! Alpha Vantage `TIME_SERIES_DAILY_ADJUSTED` provider.

pub mod params;
pub mod provider;
pub mod response;

pub use provider::AlphaVantageProvider;
