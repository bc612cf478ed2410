use serde_json::Value;
use snafu::{ResultExt, ensure};

use crate::{
    io::csv_source::parse_daily_csv,
    models::bar_series::BarSeries,
    providers::{ApiSnafu, PayloadSnafu, ProviderError},
};

/// Keys Alpha Vantage uses for error and throttling notices. These arrive as a
/// JSON object with a 200 status even when `datatype=csv` was requested.
const NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Turns a response body into a bar series, surfacing vendor notices as
/// [`ProviderError::Api`].
pub fn parse_response(symbol: &str, body: &str) -> Result<BarSeries, ProviderError> {
    let body = body.trim_start();
    if body.starts_with('{') {
        return ApiSnafu {
            message: notice_message(body),
        }
        .fail();
    }

    let series = parse_daily_csv(body.as_bytes(), symbol).context(PayloadSnafu)?;
    ensure!(
        !series.is_empty(),
        ApiSnafu {
            message: format!("no bars returned for {symbol}"),
        }
    );
    Ok(series)
}

fn notice_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };
    NOTICE_KEYS
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
