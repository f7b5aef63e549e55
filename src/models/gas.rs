//! Gas command models

use rust_decimal::Decimal;

/// Suggested Ethereum gas price tiers, all in Gwei as reported by the provider
#[derive(Debug, Clone)]
pub struct GasEstimate {
    pub fast_gwei: Decimal,
    pub standard_gwei: Decimal,
    pub slow_gwei: Decimal,
}
