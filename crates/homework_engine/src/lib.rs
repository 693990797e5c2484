//! Homework engine: HTTP clients, notification delivery and the poll loop driver.
mod client;
mod handle;
mod notifier;
mod poller;
mod telegram;

pub use client::{ApiClient, ClientSettings, ReqwestApiClient};
pub use handle::PollerHandle;
pub use notifier::{DeliveryError, MessagingClient, Notifier};
pub use poller::Poller;
pub use telegram::TelegramClient;
