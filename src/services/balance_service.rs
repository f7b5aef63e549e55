use rust_decimal::Decimal;

use crate::api::{ChainProvider, ProviderError};
use crate::models::WalletBalance;
use crate::utils::address::mask_address;
use crate::utils::format::round_half_up;

/// Renderable outcome of a balance lookup
#[derive(Debug)]
pub enum BalanceLookup {
    /// Live balance from the chain-data provider
    Live(WalletBalance),
    /// No provider credential configured; placeholder values only
    Unconfigured { address: String },
}

/// Look up the ETH balance of an address. The address must already have
/// passed the shape check; this function does not re-validate.
pub async fn get_balance(
    provider: Option<&dyn ChainProvider>,
    address: &str,
) -> Result<BalanceLookup, ProviderError> {
    let Some(provider) = provider else {
        return Ok(BalanceLookup::Unconfigured {
            address: address.to_string(),
        });
    };

    let wei = provider.balance_wei(address).await?;
    Ok(BalanceLookup::Live(WalletBalance {
        address: address.to_string(),
        balance_eth: wei_to_eth(wei),
    }))
}

/// Exact decimal conversion from wei to ETH (10^18 wei = 1 ETH).
/// Rounding to 4 decimal places happens only at render time.
pub fn wei_to_eth(wei: Decimal) -> Decimal {
    wei / Decimal::new(1_000_000_000_000_000_000, 0)
}

/// Render a resolved balance lookup into the reply text.
pub fn format_balance(lookup: &BalanceLookup) -> String {
    match lookup {
        BalanceLookup::Live(balance) => format!(
            "👛 **Wallet Balance**\n\n\
             📍 Address: {}\n\
             💰 Balance: {:.4} ETH",
            mask_address(&balance.address),
            round_half_up(balance.balance_eth, 4),
        ),
        BalanceLookup::Unconfigured { address } => format!(
            "👛 **Wallet Balance**\n\n\
             📍 Address: {}\n\
             💰 Balance: --.-- ETH",
            mask_address(address),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1";

    fn live(wei: &str) -> BalanceLookup {
        BalanceLookup::Live(WalletBalance {
            address: ADDRESS.to_string(),
            balance_eth: wei_to_eth(Decimal::from_str(wei).unwrap()),
        })
    }

    #[test]
    fn test_one_eth_boundary() {
        let reply = format_balance(&live("1000000000000000000"));
        assert!(reply.contains("Balance: 1.0000 ETH"));
    }

    #[test]
    fn test_zero_wei() {
        let reply = format_balance(&live("0"));
        assert!(reply.contains("Balance: 0.0000 ETH"));
    }

    #[test]
    fn test_one_wei_rounds_to_zero_display() {
        let reply = format_balance(&live("1"));
        assert!(reply.contains("Balance: 0.0000 ETH"));
    }

    #[test]
    fn test_fractional_balance() {
        // 1.23456789 ETH
        let reply = format_balance(&live("1234567890000000000"));
        assert!(reply.contains("Balance: 1.2346 ETH"));
    }

    #[test]
    fn test_render_rounds_the_fourth_decimal_up() {
        // 1.23455 ETH exactly; a truncating render would show 1.2345
        let reply = format_balance(&live("1234550000000000000"));
        assert!(reply.contains("Balance: 1.2346 ETH"));
    }

    #[test]
    fn test_masked_address_in_reply() {
        let reply = format_balance(&live("0"));
        assert!(reply.contains("Address: 0x742d35Cc...11F1f6f1"));
    }

    #[tokio::test]
    async fn test_unconfigured_placeholder() {
        let lookup = get_balance(None, ADDRESS).await.unwrap();
        let reply = format_balance(&lookup);
        assert!(reply.contains("Balance: --.-- ETH"));
        assert!(reply.contains("0x742d35Cc...11F1f6f1"));
    }
}
