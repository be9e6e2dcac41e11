//! Reply scheduler — simulated assistant latency.
//!
//! DESIGN
//! ======
//! Each scheduled reply is its own tokio task that sleeps until a
//! deadline fixed at scheduling time, then hands the text to its
//! delivery callback exactly once. Replies are independent: there is no
//! queue, so overlapping replies deliver in deadline order.
//!
//! Every task is wrapped in a [`ReplyHandle`]. Dropping the handle
//! detaches the task (it still delivers); [`ReplyHandle::cancel`] aborts
//! it before delivery.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Default simulated latency.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReplyError {
    #[error("reply was cancelled before delivery")]
    Cancelled,
    #[error("reply delivery panicked")]
    Panicked,
}

// =============================================================================
// HANDLE
// =============================================================================

/// Handle to one in-flight reply.
#[derive(Debug)]
pub struct ReplyHandle {
    task: JoinHandle<()>,
    deadline: Instant,
}

impl ReplyHandle {
    /// Abort the reply if it has not been delivered yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Wait for delivery.
    ///
    /// # Errors
    ///
    /// [`ReplyError::Cancelled`] if the reply was aborted,
    /// [`ReplyError::Panicked`] if the delivery callback panicked.
    pub async fn wait(self) -> Result<(), ReplyError> {
        self.task.await.map_err(|e| if e.is_cancelled() { ReplyError::Cancelled } else { ReplyError::Panicked })
    }
}

// =============================================================================
// SCHEDULER
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct ReplyScheduler {
    delay: Duration,
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ReplyScheduler {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Deliver `text` to `on_deliver` once the delay elapses.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, text: impl Into<String>, on_deliver: F) -> ReplyHandle
    where
        F: FnOnce(String) + Send + 'static,
    {
        let text = text.into();
        let deadline = Instant::now() + self.delay;
        debug!(delay = ?self.delay, "reply scheduled");

        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_deliver(text);
        });

        ReplyHandle { task, deadline }
    }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;
