use teloxide::prelude::*;

pub(crate) const HELP_REPLY: &str = "📋 **Available commands:**\n\n\
/start - Get started\n\
/price [symbol] - Cryptocurrency price\n\
/gas - Ethereum gas prices\n\
/balance [address] - Wallet balance\n\
/whale - Whale tracking\n\
/help - Command reference\n\n\
**Examples:**\n\
/price BTC\n\
/gas\n\
/balance 0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1";

pub async fn execute(bot: &Bot, msg: &Message) -> Result<(), String> {
    bot.send_message(msg.chat.id, HELP_REPLY)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}
