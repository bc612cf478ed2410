use thiserror::Error;

use crate::{
    io::csv_source::SourceError,
    providers::{ProviderError, ProviderInitError},
};

/// The unified error type for the `market_data_ingestor` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A provider could not be constructed (missing credentials, HTTP client).
    #[error("Provider setup error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// An error originating from a data provider (e.g., API error, validation).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A local bar file could not be read or parsed.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
