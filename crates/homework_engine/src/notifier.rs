use bot_logging::{bot_debug, bot_error};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("http status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("rejected by messaging api: {0}")]
    Rejected(String),
}

/// Outbound messaging channel.
#[async_trait::async_trait]
pub trait MessagingClient: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Best-effort delivery to a single chat. Failures are logged and swallowed.
pub struct Notifier {
    client: Box<dyn MessagingClient>,
    chat_id: String,
}

impl Notifier {
    pub fn new(client: Box<dyn MessagingClient>, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            chat_id: chat_id.into(),
        }
    }

    /// Sends `message`; returns whether it was delivered.
    pub async fn notify(&self, message: &str) -> bool {
        bot_debug!("Sending message to chat {}: {}", self.chat_id, message);
        match self.client.send_message(&self.chat_id, message).await {
            Ok(()) => {
                bot_debug!("Message delivered to chat {}: {}", self.chat_id, message);
                true
            }
            Err(err) => {
                bot_error!("Failed to deliver message to chat {}: {}", self.chat_id, err);
                false
            }
        }
    }
}
