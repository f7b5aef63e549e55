use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use tracing::debug;

use super::models;
use crate::api::{map_transport_error, ChainProvider, ProviderError, REQUEST_TIMEOUT};
use crate::models::GasEstimate;

/// Etherscan API client for Ethereum chain data
///
/// Everything goes through one endpoint parameterized by `module`/`action`.
pub struct EtherscanClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl EtherscanClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.etherscan.io/api";

    /// Create a new Etherscan API client
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

    async fn get(&self, params: &[(&str, &str)]) -> Result<String, ProviderError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
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

        Ok(body)
    }
}

#[async_trait]
impl ChainProvider for EtherscanClient {
    /// module=gastracker action=gasoracle
    async fn gas_oracle(&self) -> Result<GasEstimate, ProviderError> {
        debug!("Requesting gas oracle from Etherscan");
        let body = self
            .get(&[("module", "gastracker"), ("action", "gasoracle")])
            .await?;
        models::parse_gas_oracle(&body)
    }

    /// module=account action=balance
    async fn balance_wei(&self, address: &str) -> Result<Decimal, ProviderError> {
        debug!(address, "Requesting balance from Etherscan");
        let body = self
            .get(&[
                ("module", "account"),
                ("action", "balance"),
                ("address", address),
                ("tag", "latest"),
            ])
            .await?;
        models::parse_balance(&body)
    }
}
