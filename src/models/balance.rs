//! Balance command models

use rust_decimal::Decimal;

/// Result of a wallet balance query
#[derive(Debug, Clone)]
pub struct WalletBalance {
    pub address: String,
    pub balance_eth: Decimal,
}
