use teloxide::prelude::*;
use tracing::error;

use crate::api::ProviderError;
use crate::services::price_service;
use crate::AppContext;

const MISSING_SYMBOL_REPLY: &str = "❌ Please provide a coin symbol. Example: /price BTC";
const LOOKUP_FAILED_REPLY: &str = "❌ Failed to fetch the price";

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

/// Resolve the reply text for a /price invocation.
///
/// A missing argument short-circuits before any lookup. Provider failures
/// are logged here; the user only ever sees one of the fixed replies.
pub(crate) async fn reply_for(ctx: &AppContext, args: &[&str]) -> String {
    let Some(&symbol) = args.first() else {
        return MISSING_SYMBOL_REPLY.to_string();
    };

    match price_service::get_quote(ctx.price.as_deref(), symbol).await {
        Ok(lookup) => price_service::format_quote(&lookup),
        Err(ProviderError::Rejected(detail)) => {
            error!("Price lookup rejected: {}", detail);
            format!("❌ Cryptocurrency {} not found", symbol.to_uppercase())
        }
        Err(e) => {
            error!("Price lookup failed: {}", e);
            LOOKUP_FAILED_REPLY.to_string()
        }
    }
}
