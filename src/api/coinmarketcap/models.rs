use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api::ProviderError;
use crate::models::Quote;

/// Top-level shape of /v1/cryptocurrency/quotes/latest
#[derive(Debug, Deserialize)]
pub struct QuotesLatestResponse {
    #[serde(default)]
    pub data: HashMap<String, CoinEntry>,
}

/// Per-coin entry keyed by symbol under `data`
#[derive(Debug, Deserialize)]
pub struct CoinEntry {
    pub name: String,
    #[serde(default)]
    pub cmc_rank: Option<u32>,
    pub quote: HashMap<String, CurrencyQuote>,
}

/// Quote in one conversion currency
#[derive(Debug, Deserialize)]
pub struct CurrencyQuote {
    pub price: Decimal,
    pub percent_change_24h: Decimal,
}

/// Parse a quotes/latest payload and pull out the entry for `symbol`.
///
/// A payload without the requested symbol is a rejection (unknown listing),
/// anything that fails to deserialize is malformed.
pub fn parse_quotes_latest(body: &str, symbol: &str) -> Result<Quote, ProviderError> {
    let parsed: QuotesLatestResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let entry = parsed
        .data
        .get(symbol)
        .ok_or_else(|| ProviderError::Rejected(format!("symbol {} not in response", symbol)))?;

    let usd = entry
        .quote
        .get("USD")
        .ok_or_else(|| ProviderError::Malformed("quote has no USD entry".to_string()))?;

    Ok(Quote {
        symbol: symbol.to_string(),
        display_name: entry.name.clone(),
        price_usd: usd.price,
        change_24h_pct: usd.percent_change_24h,
        rank: entry.cmc_rank,
    })
}
