use std::time::Duration;

use bot_logging::{bot_debug, bot_error, bot_info};
use homework_core::{update, Effect, Msg, PollState, RETRY_PERIOD};
use tokio_util::sync::CancellationToken;

use crate::{ApiClient, Notifier};

/// Drives fetch, validate, parse and notify, one cycle at a time.
pub struct Poller {
    client: Box<dyn ApiClient>,
    notifier: Notifier,
    interval: Duration,
}

impl Poller {
    pub fn new(client: Box<dyn ApiClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            interval: RETRY_PERIOD,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Runs cycles until `cancel` fires, sleeping `interval` between them.
    pub async fn run(&self, mut state: PollState, cancel: &CancellationToken) -> PollState {
        bot_info!(
            "Polling started from cursor {} every {:?}",
            state.cursor(),
            self.interval
        );
        while !cancel.is_cancelled() {
            state = self.run_cycle(state).await;
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
        bot_info!("Polling stopped at cursor {}", state.cursor());
        state
    }

    /// One fetch/compare/notify pass. Never fails; problems become effects.
    pub async fn run_cycle(&self, state: PollState) -> PollState {
        let msg = match self.client.fetch(state.cursor()).await {
            Ok(body) => Msg::ResponseReceived(body),
            Err(err) => Msg::FetchFailed(err),
        };
        let (state, effects) = update(state, msg);

        if effects.is_empty() {
            bot_debug!("No new homework statuses");
        }
        for effect in effects {
            self.apply(effect).await;
        }
        state
    }

    async fn apply(&self, effect: Effect) {
        match effect {
            Effect::Notify { message } => {
                bot_info!("Homework status changed: {}", message);
                self.notifier.notify(&message).await;
            }
            Effect::ReportFailure { error, message } => {
                bot_error!("Poll cycle failed: {}", error);
                self.notifier.notify(&message).await;
            }
            Effect::RecordSkipped { index, error } => {
                bot_error!("Skipping homework record #{}: {}", index, error);
            }
        }
    }
}
