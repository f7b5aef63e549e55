use crate::api::{PriceProvider, ProviderError};
use crate::models::Quote;
use crate::utils::format::{change_indicator, format_signed_pct, format_usd};

/// Renderable outcome of a price lookup
#[derive(Debug)]
pub enum QuoteLookup {
    /// Live data from the price provider
    Live(Quote),
    /// No provider credential configured; placeholder values only
    Unconfigured { symbol: String },
}

/// Look up the latest USD quote for a ticker symbol.
///
/// The symbol is normalized to uppercase before anything else. Without a
/// configured provider this resolves to the placeholder outcome and never
/// touches the network.
pub async fn get_quote(
    provider: Option<&dyn PriceProvider>,
    symbol: &str,
) -> Result<QuoteLookup, ProviderError> {
    let symbol = symbol.to_uppercase();

    let Some(provider) = provider else {
        return Ok(QuoteLookup::Unconfigured { symbol });
    };

    let quote = provider.latest_quote(&symbol).await?;
    Ok(QuoteLookup::Live(quote))
}

/// Render a resolved price lookup into the reply text.
pub fn format_quote(lookup: &QuoteLookup) -> String {
    match lookup {
        QuoteLookup::Live(quote) => {
            let rank = quote
                .rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            format!(
                "💰 **{} ({})**\n\n\
                 💵 Price: ${}\n\
                 {} 24h Change: {}%\n\
                 🆔 Rank: #{}",
                quote.display_name,
                quote.symbol,
                format_usd(quote.price_usd),
                change_indicator(quote.change_24h_pct),
                format_signed_pct(quote.change_24h_pct),
                rank,
            )
        }
        QuoteLookup::Unconfigured { symbol } => {
            format!(
                "💰 **{}**\n\n\
                 💵 Price: $--\n\
                 📊 24h Change: --%\n\
                 🆔 Rank: #--",
                symbol
            )
        }
    }
}
