use std::io;
use std::thread::{self, JoinHandle};

use homework_core::PollState;
use tokio_util::sync::CancellationToken;

use crate::Poller;

/// Runs a [`Poller`] on its own thread and runtime so the host stays free.
pub struct PollerHandle {
    cancel: CancellationToken,
    thread: JoinHandle<PollState>,
}

impl PollerHandle {
    pub fn spawn(poller: Poller, state: PollState) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let thread = thread::Builder::new()
            .name("homework-poller".to_string())
            .spawn(move || runtime.block_on(poller.run(state, &token)))?;

        Ok(Self { cancel, thread })
    }

    /// Asks the loop to stop at its next cancellation point.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Waits for the loop to exit. `None` if the poller thread panicked.
    pub fn join(self) -> Option<PollState> {
        self.thread.join().ok()
    }
}
