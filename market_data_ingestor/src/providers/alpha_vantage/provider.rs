use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use shared_utils::config::resolve_secret;
use snafu::{ResultExt, ensure};
use tracing::info;

use crate::{
    models::{bar_series::BarSeries, request_params::BarsRequestParams},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, MissingApiKeySnafu, ProviderError,
        ProviderInitError, ReqwestSnafu,
        alpha_vantage::{
            params::{API_KEY_VAR, BASE_URL, REQUESTS_PER_MINUTE, construct_params, validate_symbol},
            response::parse_response,
        },
    },
};

pub struct AlphaVantageProvider {
    client: Client,
    api_key: SecretString,
    limiter: DefaultDirectRateLimiter,
    base_url: String,
}

impl AlphaVantageProvider {
    /// Creates a new Alpha Vantage provider.
    ///
    /// Reads the API key from `ALPHAVANTAGE_API_KEY` in the environment, or
    /// from a `.env` file in the working directory when the variable is unset.
    /// Fails if neither source has it.
    pub fn new() -> Result<Self, ProviderInitError> {
        let key = resolve_secret(API_KEY_VAR).context(MissingApiKeySnafu)?;
        Self::with_api_key(SecretString::new(key.value.into()))
    }

    /// Creates a provider with an explicit key, throttled to the free-tier quota.
    pub fn with_api_key(api_key: SecretString) -> Result<Self, ProviderInitError> {
        let client = Client::builder().build().context(ClientBuildSnafu)?;
        let per_minute = NonZeroU32::new(REQUESTS_PER_MINUTE).unwrap_or(nonzero!(1u32));
        Ok(Self {
            client,
            api_key,
            limiter: RateLimiter::direct(Quota::per_minute(per_minute)),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Replaces the request quota (e.g. for a premium key).
    pub fn with_quota(mut self, quota: Quota) -> Self {
        self.limiter = RateLimiter::direct(quota);
        self
    }

    /// Points the provider at another endpoint (a proxy or a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl DataProvider for AlphaVantageProvider {
    async fn fetch_bars(&self, params: &BarsRequestParams) -> Result<BarSeries, ProviderError> {
        let symbol = validate_symbol(params)?;
        let query = construct_params(&symbol, params, self.api_key.expose_secret());

        self.limiter.until_ready().await;
        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(ReqwestSnafu)?;
        ensure!(
            status.is_success(),
            ApiSnafu {
                message: format!("HTTP {status}: {body}"),
            }
        );

        let series = parse_response(&symbol, &body)?;
        info!(symbol = %series.symbol, rows = series.len(), "fetched daily bars");
        Ok(series)
    }
}
