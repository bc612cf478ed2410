//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the single interface the rest
//! of the workspace uses to obtain a raw daily [`BarSeries`] for one symbol.
//! Concrete vendors (currently only [`alpha_vantage`]) implement it and own
//! their transport, credentials and throttling. Callers receive a fully
//! materialized series or an error; nothing downstream retries or reaches back
//! into the network layer.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data_ingestor::models::{bar_series::BarSeries, request_params::BarsRequestParams};
//! use market_data_ingestor::providers::{DataProvider, ProviderError};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl DataProvider for Canned {
//!     async fn fetch_bars(&self, params: &BarsRequestParams) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries::new(params.symbol.clone(), vec![]))
//!     }
//! }
//! ```

pub mod alpha_vantage;

use async_trait::async_trait;
use shared_utils::config::ConfigError;
use snafu::{Backtrace, Snafu};

use crate::io::csv_source::SourceError;
use crate::models::{bar_series::BarSeries, request_params::BarsRequestParams};

/// Trait for fetching daily bars from a market data provider.
///
/// Supports dynamic dispatch (`dyn DataProvider`) for runtime selection.
#[async_trait]
pub trait DataProvider {
    /// Fetches the daily bar series described by `params`.
    ///
    /// # Returns
    ///
    /// * `Ok(BarSeries)` - bars for `params.symbol`, oldest first.
    /// * `Err(ProviderError)` - transport, vendor or parsing failure.
    async fn fetch_bars(&self, params: &BarsRequestParams) -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// The API key could not be resolved from any configured source.
    #[snafu(display("API key unavailable: {source}"))]
    MissingApiKey {
        source: ConfigError,
        backtrace: Backtrace,
    },

    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned an error message instead of data
    /// (invalid key, unknown symbol, throttling notice).
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },

    /// The payload looked like data but could not be parsed.
    #[snafu(display("Failed to parse provider payload: {source}"))]
    Payload {
        source: SourceError,
        backtrace: Backtrace,
    },
}
