use crate::core::config::ExchangeRateProviderConfig;
use crate::core::currency::{BASE_CURRENCY, RateProvider, RateTable};
use crate::core::error::FetchError;
use crate::providers::util::with_retry;
use anyhow::Result;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Latest CHF quotes from the exchangerate-api.com v6 API.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
    retries: usize,
    retry_delay_ms: u64,
}

impl ExchangeRateApiProvider {
    pub fn new(config: &ExchangeRateProviderConfig, api_key: Option<SecretString>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("chfx/0.1")
            .timeout(config.timeout())
            .build()?;

        Ok(ExchangeRateApiProvider {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
            retries: config.retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    conversion_rates: Option<RateTable>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self), fields(base = BASE_CURRENCY))]
    async fn fetch_rates(&self) -> Result<RateTable, FetchError> {
        let api_key = self.api_key.as_ref().ok_or(FetchError::MissingApiKey)?;

        let url = format!(
            "{}/v6/{}/latest/{}",
            self.base_url,
            api_key.expose_secret(),
            BASE_CURRENCY
        );
        debug!(
            "Requesting exchange rates from {}/v6/***/latest/{}",
            self.base_url, BASE_CURRENCY
        );

        let response = with_retry(
            || async {
                self.client
                    .get(&url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
            },
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .map_err(|e| FetchError::from(e.without_url()))?;

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::from(e.without_url()))?;
        let data: LatestRatesResponse =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;

        if data.result.as_deref() == Some("error") {
            return Err(FetchError::Upstream(
                data.error_type.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        let rates = data.conversion_rates.ok_or(FetchError::MissingRates)?;
        debug!(count = rates.len(), "Received exchange rates");
        Ok(rates)
    }
}
