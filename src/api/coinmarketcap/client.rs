use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models;
use crate::api::{map_transport_error, PriceProvider, ProviderError, REQUEST_TIMEOUT};
use crate::models::Quote;

/// CoinMarketCap API client for cryptocurrency quote lookups
pub struct CoinMarketCapClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl CoinMarketCapClient {
    const DEFAULT_BASE_URL: &'static str = "https://pro-api.coinmarketcap.com";

    /// Create a new CoinMarketCap API client
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl PriceProvider for CoinMarketCapClient {
    /// GET /v1/cryptocurrency/quotes/latest
    ///
    /// `symbol` must already be uppercased; the response keys quotes by the
    /// exact symbol that was requested.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, ProviderError> {
        let url = format!("{}/v1/cryptocurrency/quotes/latest", self.base_url);
        debug!(symbol, "Requesting quote from CoinMarketCap");

        let response = self
            .http_client
            .get(&url)
            .query(&[("symbol", symbol), ("convert", "USD")])
            .header("Accepts", "application/json")
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(ProviderError::Rejected(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        models::parse_quotes_latest(&body, symbol)
    }
}
