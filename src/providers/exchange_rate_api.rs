use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::core::error::{ConvertError, Result};
use crate::core::rates::{ExchangeRateSnapshot, RateProvider};

// ExchangeRateApiProvider implementation for RateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn request(&self, url: &str) -> anyhow::Result<ExchangeRateSnapshot> {
        let client = reqwest::Client::builder().user_agent("fxconv/1.0").build()?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        debug!(response = ?response, "Received exchange rate response");

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} URL: {}", response.status(), url));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response from {}: {}", url, e))
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateFetch",
        skip(self),
        fields(base = %base)
    )]
    async fn fetch_rates(&self, base: &str) -> Result<ExchangeRateSnapshot> {
        let base = base.trim();
        if base.is_empty() {
            return Err(ConvertError::InvalidCurrencyCode(base.to_string()));
        }

        let url = format!("{}/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        self.request(&url).await.map_err(|e| {
            error!(error = %e, "Error fetching exchange rates");
            ConvertError::rate_fetch(e)
        })
    }
}
