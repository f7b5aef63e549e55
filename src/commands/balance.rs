use teloxide::prelude::*;
use tracing::error;

use crate::services::balance_service;
use crate::utils::address::is_valid_address;
use crate::AppContext;

const MISSING_ADDRESS_REPLY: &str =
    "❌ Please provide a wallet address. Example: /balance 0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1";
const INVALID_ADDRESS_REPLY: &str =
    "❌ That doesn't look like an Ethereum address. Expected 0x followed by 40 characters.";
const LOOKUP_FAILED_REPLY: &str = "❌ Failed to fetch the balance. Check the address and try again.";

pub async fn execute(
    bot: &Bot,
    msg: &Message,
    ctx: &AppContext,
    args: &[&str],
) -> Result<(), String> {
    let reply = reply_for(ctx, args).await;
    bot.send_message(msg.chat.id, reply)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Resolve the reply text for a /balance invocation.
///
/// The address shape is checked before everything else, so an invalid
/// address never reaches the provider or the placeholder path.
pub(crate) async fn reply_for(ctx: &AppContext, args: &[&str]) -> String {
    let Some(&address) = args.first() else {
        return MISSING_ADDRESS_REPLY.to_string();
    };

    if !is_valid_address(address) {
        return INVALID_ADDRESS_REPLY.to_string();
    }

    match balance_service::get_balance(ctx.chain.as_deref(), address).await {
        Ok(lookup) => balance_service::format_balance(&lookup),
        Err(e) => {
            error!("Balance lookup failed: {}", e);
            LOOKUP_FAILED_REPLY.to_string()
        }
    }
}
