pub mod balance;
pub mod gas;
pub mod help;
pub mod price;
pub mod start;
pub mod whale;

use teloxide::prelude::*;
use tracing::{debug, error};

use crate::AppContext;

/// Fixed reply for any handler fault that reaches the dispatch boundary.
const GENERIC_ERROR_REPLY: &str = "❌ An error occurred while executing the command.";

/// Dispatch one inbound message to its command handler.
///
/// Unknown commands and plain text are ignored. A handler error is logged
/// here and converted into one fixed reply; it never takes the process down.
pub async fn handle_message(bot: &Bot, msg: &Message, ctx: &AppContext) {
    let Some(text) = msg.text() else {
        return;
    };

    let Some((command, args)) = parse_command(text) else {
        return;
    };
    let args = args.as_slice();

    debug!(command, ?args, "Dispatching command");

    let result = match command {
        "/start" => start::execute(bot, msg).await,
        "/price" => price::execute(bot, msg, ctx, args).await,
        "/gas" => gas::execute(bot, msg, ctx).await,
        "/balance" => balance::execute(bot, msg, ctx, args).await,
        "/whale" => whale::execute(bot, msg, args).await,
        "/help" => help::execute(bot, msg).await,
        _ => return,
    };

    if let Err(e) = result {
        error!("Error executing command {}: {}", command, e);
        if let Err(send_err) = bot.send_message(msg.chat.id, GENERIC_ERROR_REPLY).await {
            error!("Failed to deliver the error reply: {}", send_err);
        }
    }
}

/// Split message text into a command token and its arguments.
///
/// Returns `None` for anything that is not a command. Group chats address a
/// specific bot as "/price@SomeBot"; the suffix is stripped.
fn parse_command(text: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = text.split_whitespace();
    let first = parts.next()?;

    if !first.starts_with('/') {
        return None;
    }

    let command = first.split('@').next().unwrap_or(first);
    Some((command, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let (command, args) = parse_command("/price BTC").unwrap();
        assert_eq!(command, "/price");
        assert_eq!(args, vec!["BTC"]);
    }

    #[test]
    fn test_parse_strips_bot_suffix() {
        let (command, args) = parse_command("/price@SomeBot btc").unwrap();
        assert_eq!(command, "/price");
        assert_eq!(args, vec!["btc"]);
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(parse_command("hello world").is_none());
        assert!(parse_command("").is_none());
        assert!(parse_command("   ").is_none());
        assert!(parse_command("price BTC").is_none());
    }

    #[test]
    fn test_unknown_command_token_kept_verbatim() {
        // The dispatch match ignores it; parsing must not rewrite it
        let (command, args) = parse_command("/moon now").unwrap();
        assert_eq!(command, "/moon");
        assert_eq!(args, vec!["now"]);
    }

    #[test]
    fn test_args_split_on_any_whitespace() {
        let (command, args) =
            parse_command("/balance\t0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1  extra").unwrap();
        assert_eq!(command, "/balance");
        assert_eq!(
            args,
            vec!["0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1", "extra"]
        );
    }
}
