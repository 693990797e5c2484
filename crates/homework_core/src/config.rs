use std::fmt;

use url::Url;

use crate::ConfigError;

/// Required keys in the order they are reported when absent.
pub const REQUIRED_KEYS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const ENDPOINT_KEY: &str = "PRACTICUM_ENDPOINT";
const TELEGRAM_API_BASE_KEY: &str = "TELEGRAM_API_BASE";
const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Runtime configuration of the bot.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: Url,
    pub telegram_api_base: Url,
}

impl Config {
    /// Builds the configuration from a key lookup (usually the process environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = missing_tokens(&lookup);
        if !missing.is_empty() {
            return Err(ConfigError::Missing { names: missing });
        }
        let required = |key: &'static str| lookup(key).unwrap_or_default();

        Ok(Self {
            practicum_token: required(REQUIRED_KEYS[0]),
            telegram_token: required(REQUIRED_KEYS[1]),
            telegram_chat_id: required(REQUIRED_KEYS[2]),
            endpoint: url_or_default(&lookup, ENDPOINT_KEY, DEFAULT_ENDPOINT)?,
            telegram_api_base: url_or_default(
                &lookup,
                TELEGRAM_API_BASE_KEY,
                DEFAULT_TELEGRAM_API_BASE,
            )?,
        })
    }
}

// Tokens stay out of log output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint.as_str())
            .field("telegram_api_base", &self.telegram_api_base.as_str())
            .finish()
    }
}

/// Returns the required keys that have no non-empty value, order-preserving.
pub fn missing_tokens<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| lookup(*key).map_or(true, |value| value.is_empty()))
        .collect()
}

fn url_or_default<F>(lookup: &F, key: &'static str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    Ok(url)
}
