//! Price command models

use rust_decimal::Decimal;

/// Latest market data for one cryptocurrency, produced per request
#[derive(Debug, Clone)]
pub struct Quote {
    pub symbol: String,
    pub display_name: String,
    pub price_usd: Decimal,
    pub change_24h_pct: Decimal,
    /// Market-cap rank; the provider omits it for unranked listings
    pub rank: Option<u32>,
}
