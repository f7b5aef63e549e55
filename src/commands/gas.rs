use teloxide::prelude::*;
use tracing::error;

use crate::services::gas_service;
use crate::AppContext;

const LOOKUP_FAILED_REPLY: &str = "❌ Failed to fetch gas data";

pub async fn execute(bot: &Bot, msg: &Message, ctx: &AppContext) -> Result<(), String> {
    let reply = reply_for(ctx).await;
    bot.send_message(msg.chat.id, reply)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Resolve the reply text for a /gas invocation. Every provider failure
/// collapses into the same fixed reply; the kind only matters in the log.
pub(crate) async fn reply_for(ctx: &AppContext) -> String {
    match gas_service::get_gas(ctx.chain.as_deref()).await {
        Ok(lookup) => gas_service::format_gas(&lookup),
        Err(e) => {
            error!("Gas lookup failed: {}", e);
            LOOKUP_FAILED_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ChainProvider, ProviderError};
    use crate::models::GasEstimate;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    struct FailingChainProvider;

    #[async_trait]
    impl ChainProvider for FailingChainProvider {
        async fn gas_oracle(&self) -> Result<GasEstimate, ProviderError> {
            Err(ProviderError::Timeout)
        }

        async fn balance_wei(&self, _address: &str) -> Result<Decimal, ProviderError> {
            Err(ProviderError::Timeout)
        }
    }

    #[tokio::test]
    async fn test_timeout_renders_fixed_failure_reply() {
        let ctx = AppContext {
            price: None,
            chain: Some(Arc::new(FailingChainProvider)),
        };
        let reply = reply_for(&ctx).await;
        assert_eq!(reply, LOOKUP_FAILED_REPLY);
    }

    #[tokio::test]
    async fn test_unconfigured_provider_renders_placeholder() {
        let ctx = AppContext {
            price: None,
            chain: None,
        };
        let reply = reply_for(&ctx).await;
        assert!(reply.contains("Fast: -- Gwei"));
    }
}
