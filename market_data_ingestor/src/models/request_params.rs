use std::fmt;

use serde::{Deserialize, Serialize};

/// How much history to request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSize {
    /// Roughly the latest 100 trading days.
    #[default]
    Compact,
    /// The full available history.
    Full,
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        })
    }
}

/// Parameters for requesting daily bars for one symbol from any provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequestParams {
    /// Ticker to request (e.g., `"AAPL"`). Providers uppercase it.
    pub symbol: String,

    /// Amount of history.
    #[serde(default)]
    pub output_size: OutputSize,
}

impl BarsRequestParams {
    pub fn new(symbol: impl Into<String>, output_size: OutputSize) -> Self {
        Self {
            symbol: symbol.into(),
            output_size,
        }
    }
}
