use crate::api::{ChainProvider, ProviderError};
use crate::models::GasEstimate;

/// Renderable outcome of a gas lookup
#[derive(Debug)]
pub enum GasLookup {
    /// Live tiers from the chain-data provider
    Live(GasEstimate),
    /// No provider credential configured; placeholder values only
    Unconfigured,
}

/// Look up the current gas price tiers. Tiers come back verbatim in the
/// provider's unit (Gwei); no conversion happens here.
pub async fn get_gas(provider: Option<&dyn ChainProvider>) -> Result<GasLookup, ProviderError> {
    let Some(provider) = provider else {
        return Ok(GasLookup::Unconfigured);
    };

    let estimate = provider.gas_oracle().await?;
    Ok(GasLookup::Live(estimate))
}

/// Render a resolved gas lookup into the reply text.
pub fn format_gas(lookup: &GasLookup) -> String {
    match lookup {
        GasLookup::Live(gas) => format!(
            "⛽ **Gas Prices (Ethereum)**\n\n\
             🚀 Fast: {} Gwei\n\
             🐢 Slow: {} Gwei\n\
             ⚡ Standard: {} Gwei",
            gas.fast_gwei, gas.slow_gwei, gas.standard_gwei,
        ),
        GasLookup::Unconfigured => "⛽ **Gas Prices (Ethereum)**\n\n\
             🚀 Fast: -- Gwei\n\
             🐢 Slow: -- Gwei\n\
             ⚡ Standard: -- Gwei"
            .to_string(),
    }
}
