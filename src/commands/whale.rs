use teloxide::prelude::*;

/// Stub reply; whale tracking performs no lookup yet.
pub(crate) const WHALE_REPLY: &str = "🐋 **Whale Tracking**\n\n\
🚧 This feature is under construction!\n\n\
In the meantime:\n\
/price - coin prices\n\
/gas - Ethereum gas\n\
/balance - wallet balance";

pub async fn execute(bot: &Bot, msg: &Message, args: &[&str]) -> Result<(), String> {
    bot.send_message(msg.chat.id, reply_for(args))
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Always the same stub, whatever the arguments were.
pub(crate) fn reply_for(_args: &[&str]) -> &'static str {
    WHALE_REPLY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_identical_for_any_arguments() {
        let no_args = reply_for(&[]);
        let with_args = reply_for(&["0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1", "BTC"]);
        assert_eq!(no_args, with_args);
        assert_eq!(no_args, WHALE_REPLY);
        assert!(no_args.contains("🐋"));
    }
}
