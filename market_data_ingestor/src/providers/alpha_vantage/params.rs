use crate::{
    models::request_params::BarsRequestParams,
    providers::{ProviderError, ValidationSnafu},
};

pub const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable (or `.env` entry) holding the API key.
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";

const FUNCTION: &str = "TIME_SERIES_DAILY_ADJUSTED";

/// Free-tier request budget.
pub const REQUESTS_PER_MINUTE: u32 = 5;

/// Checks the symbol is something the endpoint can accept.
///
/// Alpha Vantage tickers are letters, digits, `.` and `-` (e.g. `BRK-B`, `SHOP.TRT`).
pub fn validate_symbol(params: &BarsRequestParams) -> Result<String, ProviderError> {
    let symbol = params.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return ValidationSnafu {
            message: "symbol must not be empty",
        }
        .fail();
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return ValidationSnafu {
            message: format!("invalid symbol: {symbol}"),
        }
        .fail();
    }
    Ok(symbol)
}

/// Builds the query string for one request. `symbol` must already be validated.
pub fn construct_params(
    symbol: &str,
    params: &BarsRequestParams,
    api_key: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("function", FUNCTION.to_string()),
        ("symbol", symbol.to_string()),
        ("outputsize", params.output_size.to_string()),
        ("datatype", "csv".to_string()),
        ("apikey", api_key.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request_params::OutputSize;

    #[test]
    fn symbol_is_normalized() {
        let p = BarsRequestParams::new(" brk-b ", OutputSize::Full);
        assert_eq!(validate_symbol(&p).unwrap(), "BRK-B");
    }

    #[test]
    fn rejects_empty_and_odd_symbols() {
        assert!(validate_symbol(&BarsRequestParams::new("  ", OutputSize::Compact)).is_err());
        assert!(validate_symbol(&BarsRequestParams::new("A&B", OutputSize::Compact)).is_err());
    }

    #[test]
    fn query_requests_csv_with_output_size() {
        let p = BarsRequestParams::new("IBM", OutputSize::Full);
        let q = construct_params("IBM", &p, "k");
        assert!(q.contains(&("function", "TIME_SERIES_DAILY_ADJUSTED".to_string())));
        assert!(q.contains(&("outputsize", "full".to_string())));
        assert!(q.contains(&("datatype", "csv".to_string())));
        assert!(q.contains(&("apikey", "k".to_string())));
    }
}
