use teloxide::prelude::*;

pub async fn execute(bot: &Bot, msg: &Message) -> Result<(), String> {
    let name = msg
        .from
        .as_ref()
        .map(|user| user.first_name.as_str())
        .unwrap_or("there");

    bot.send_message(msg.chat.id, welcome_text(name))
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Welcome template, personalized with the sender's first name.
pub(crate) fn welcome_text(name: &str) -> String {
    format!(
        "🚀 **Hi, {}!**\n\n\
         🤖 **Crypto Intelligence Bot** is online!\n\n\
         📊 **Crypto market at a glance: prices, whales, gas**\n\n\
         **Available commands:**\n\
         /start - Get started\n\
         /price [symbol] - Cryptocurrency price\n\
         /gas - Current Ethereum gas prices\n\
         /balance [address] - Ethereum wallet balance\n\
         /whale - Whale movements\n\
         /help - Command reference\n\n\
         **Examples:**\n\
         /price BTC\n\
         /price ETH\n\
         /price TON\n\
         /gas\n\
         /balance 0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1",
        name
    )
}
