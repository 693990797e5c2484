use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DeliveryError, MessagingClient};

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client (`sendMessage` only).
#[derive(Debug, Clone)]
pub struct TelegramClient {
    send_message_url: Url,
    client: reqwest::Client,
}

impl TelegramClient {
    /// Resolves the method url and builds the HTTP client once.
    pub fn new(api_base: Url, token: impl Into<String>) -> Result<Self, DeliveryError> {
        let send_message_url = method_url(&api_base, &token.into(), "sendMessage")?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;
        Ok(Self {
            send_message_url,
            client,
        })
    }
}

fn method_url(api_base: &Url, token: &str, method: &str) -> Result<Url, DeliveryError> {
    let base = api_base.as_str().trim_end_matches('/');
    // Parse errors echo the input, which embeds the bot token.
    Url::parse(&format!("{base}/bot{token}/{method}"))
        .map_err(|_| DeliveryError::Transport(format!("invalid {method} url")))
}

#[async_trait::async_trait]
impl MessagingClient for TelegramClient {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.send_message_url.clone())
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // The request url embeds the bot token.
            .map_err(|err| DeliveryError::Transport(err.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| DeliveryError::Transport(err.without_url().to_string()))?;
        if !status.is_success() {
            return Err(DeliveryError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        let reply: BotApiReply = serde_json::from_str(&body)
            .map_err(|err| DeliveryError::Rejected(format!("unreadable reply: {err}")))?;
        if reply.ok {
            Ok(())
        } else {
            Err(DeliveryError::Rejected(
                reply.description.unwrap_or_else(|| "ok=false".to_string()),
            ))
        }
    }
}
