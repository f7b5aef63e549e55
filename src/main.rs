use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use api::{ChainProvider, CoinMarketCapClient, EtherscanClient, PriceProvider};
use config::Config;

/// Provider clients built once at startup and shared by every handler.
/// A `None` means the credential is not configured and the corresponding
/// commands answer with placeholder data.
pub struct AppContext {
    pub price: Option<Arc<dyn PriceProvider>>,
    pub chain: Option<Arc<dyn ChainProvider>>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let price = config
            .coinmarketcap_key
            .clone()
            .map(|key| Arc::new(CoinMarketCapClient::new(key)) as Arc<dyn PriceProvider>);

        let chain = config
            .etherscan_key
            .clone()
            .map(|key| Arc::new(EtherscanClient::new(key)) as Arc<dyn ChainProvider>);

        Self { price, chain }
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("crypto_intel_bot=debug".parse().unwrap())
                .add_directive("teloxide=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("🤖 Starting Crypto Intelligence Bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };

    if config.coinmarketcap_key.is_none() {
        warn!("COINMARKETCAP_API not set; /price will reply with placeholder data");
    }
    if config.etherscan_key.is_none() {
        warn!("ETHERSCAN_API not set; /gas and /balance will reply with placeholder data");
    }

    let ctx = Arc::new(AppContext::new(&config));
    let bot = Bot::new(&config.telegram_token);

    info!("Connecting to Telegram...");
    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let ctx = Arc::clone(&ctx);
        async move {
            commands::handle_message(&bot, &msg, &ctx).await;
            respond(())
        }
    })
    .await;
}
