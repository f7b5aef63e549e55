pub mod coinmarketcap;
pub mod etherscan;

pub use coinmarketcap::CoinMarketCapClient;
pub use etherscan::EtherscanClient;

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{GasEstimate, Quote};

/// Timeout applied to every outbound provider request. No retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure kinds shared by both provider clients.
///
/// Users never see these directly; each command maps them onto its own
/// fixed reply while the detail goes to the log.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request did not complete within [`REQUEST_TIMEOUT`]
    #[error("request timed out")]
    Timeout,
    /// Connection-level failure (DNS, TLS, connection refused, ...)
    #[error("network error: {0}")]
    Network(String),
    /// The provider answered but refused the request
    /// (non-success HTTP status, unknown symbol, error status field)
    #[error("provider rejected the request: {0}")]
    Rejected(String),
    /// The provider answered with a payload of an unexpected shape
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Map a reqwest transport failure onto the taxonomy.
pub(crate) fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.to_string())
    }
}

/// Quote source backing `/price`.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the latest USD quote for an uppercased ticker symbol.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, ProviderError>;
}

/// Ethereum chain-data source backing `/gas` and `/balance`.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Current suggested gas price tiers.
    async fn gas_oracle(&self) -> Result<GasEstimate, ProviderError>;

    /// Balance of `address`, in wei.
    async fn balance_wei(&self, address: &str) -> Result<Decimal, ProviderError>;
}
