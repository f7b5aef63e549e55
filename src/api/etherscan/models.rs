use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api::ProviderError;
use crate::models::GasEstimate;

/// Envelope shared by every Etherscan module/action pair.
///
/// `result` is an object for gasoracle but a plain string for balance (and an
/// error string whenever `status != "1"`), so it stays a raw value until the
/// status check has passed.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// gastracker/gasoracle `result` object
#[derive(Debug, Deserialize)]
pub struct GasOracleResult {
    #[serde(rename = "FastGasPrice")]
    pub fast: String,
    #[serde(rename = "ProposeGasPrice")]
    pub propose: String,
    #[serde(rename = "SafeGasPrice")]
    pub safe: String,
}

fn parse_envelope(body: &str) -> Result<serde_json::Value, ProviderError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    if envelope.status != "1" {
        return Err(ProviderError::Rejected(format!(
            "status {} ({})",
            envelope.status, envelope.message
        )));
    }

    Ok(envelope.result)
}

/// Parse a gasoracle payload into gas price tiers, kept verbatim in Gwei.
pub fn parse_gas_oracle(body: &str) -> Result<GasEstimate, ProviderError> {
    let result = parse_envelope(body)?;
    let oracle: GasOracleResult =
        serde_json::from_value(result).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    Ok(GasEstimate {
        fast_gwei: parse_gwei(&oracle.fast)?,
        standard_gwei: parse_gwei(&oracle.propose)?,
        slow_gwei: parse_gwei(&oracle.safe)?,
    })
}

fn parse_gwei(raw: &str) -> Result<Decimal, ProviderError> {
    Decimal::from_str(raw)
        .map_err(|e| ProviderError::Malformed(format!("bad gas price '{}': {}", raw, e)))
}

/// Parse an account/balance payload into a wei amount.
pub fn parse_balance(body: &str) -> Result<Decimal, ProviderError> {
    let result = parse_envelope(body)?;
    let wei: String =
        serde_json::from_value(result).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    Decimal::from_str(&wei)
        .map_err(|e| ProviderError::Malformed(format!("bad wei amount '{}': {}", wei, e)))
}
