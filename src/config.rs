use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELEGRAM_TOKEN is not set; the bot cannot start without it")]
    MissingTelegramToken,
}

/// Credentials read once at startup and immutable afterwards.
///
/// The provider keys are optional: a missing key degrades the corresponding
/// commands to placeholder replies instead of failing.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub coinmarketcap_key: Option<String>,
    pub etherscan_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token =
            read_var("TELEGRAM_TOKEN").ok_or(ConfigError::MissingTelegramToken)?;

        Ok(Self {
            telegram_token,
            coinmarketcap_key: read_var("COINMARKETCAP_API"),
            etherscan_key: read_var("ETHERSCAN_API"),
        })
    }
}

/// Treat empty or whitespace-only variables the same as unset ones.
fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
