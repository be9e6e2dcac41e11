//! Chat widget — window state machine plus the submit and quick-reply flows.
//!
//! DESIGN
//! ======
//! The widget owns its transcript behind `Arc<Mutex<_>>` so scheduled
//! replies can append from their own tasks. The lock is only ever held
//! for a single append or read, never across an await.
//!
//! Window state is `Closed`/`Open` with no terminal state. Closing never
//! touches the transcript, and replies that land while closed are simply
//! there on reopen.
//!
//! Suggestion visibility is computed from transcript length on every
//! read; there is no stored flag to fall out of sync.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::intent::Classifier;
use super::quick_reply::QuickReply;
use super::scheduler::{ReplyError, ReplyHandle, ReplyScheduler};
use super::transcript::{Message, Transcript};
use crate::config::AssistantConfig;

/// Header title shown above the transcript.
pub const ASSISTANT_TITLE: &str = "SoftSell Assistant";

/// First assistant message of every session.
pub const GREETING: &str = "Hi there! How can I help you with SoftSell today?";

/// Suggestions stay visible while the transcript has fewer messages than this.
pub const SUGGESTION_THRESHOLD: usize = 3;

type Listeners = Arc<Mutex<Vec<mpsc::UnboundedSender<Message>>>>;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Closed,
    Open,
}

/// What a submit or quick-reply attempt did. Only `Sent` changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Draft was empty after trimming.
    Empty,
    /// Window is closed.
    Closed,
    /// Suggestion panel is no longer shown.
    SuggestionsHidden,
}

// =============================================================================
// WIDGET
// =============================================================================

pub struct ChatWidget {
    window: WindowState,
    transcript: Arc<Mutex<Transcript>>,
    draft: String,
    classifier: Classifier,
    scheduler: ReplyScheduler,
    pending: Vec<ReplyHandle>,
    listeners: Listeners,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(ReplyScheduler::default())
    }
}

impl ChatWidget {
    /// Closed widget with the greeting already in the transcript.
    #[must_use]
    pub fn new(scheduler: ReplyScheduler) -> Self {
        // GREETING is a non-empty constant, so seeding cannot fail.
        let transcript = Transcript::seeded(GREETING).unwrap_or_default();
        Self {
            window: WindowState::Closed,
            transcript: Arc::new(Mutex::new(transcript)),
            draft: String::new(),
            classifier: Classifier::default(),
            scheduler,
            pending: Vec::new(),
            listeners: Arc::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AssistantConfig) -> Self {
        let mut widget = Self::new(ReplyScheduler::new(config.reply_delay));
        if config.start_open {
            widget.open();
        }
        widget
    }

    // -------------------------------------------------------------------------
    // Window controls
    // -------------------------------------------------------------------------

    pub fn open(&mut self) {
        if self.window == WindowState::Closed {
            info!(messages = self.transcript_len(), "assistant opened");
        }
        self.window = WindowState::Open;
    }

    pub fn close(&mut self) {
        if self.window == WindowState::Open {
            info!(pending = self.pending_replies(), "assistant closed");
        }
        self.window = WindowState::Closed;
    }

    pub fn toggle(&mut self) {
        match self.window {
            WindowState::Closed => self.open(),
            WindowState::Open => self.close(),
        }
    }

    #[must_use]
    pub fn window(&self) -> WindowState {
        self.window
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.window == WindowState::Open
    }

    // -------------------------------------------------------------------------
    // Draft input
    // -------------------------------------------------------------------------

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the send control is enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    // -------------------------------------------------------------------------
    // Flows
    // -------------------------------------------------------------------------

    /// Commit the draft: post it, clear the draft, schedule the classified reply.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_open() {
            return SubmitOutcome::Closed;
        }
        let Ok(message) = Message::user(&self.draft) else {
            return SubmitOutcome::Empty;
        };
        let reply = self.classifier.classify(message.text());
        self.draft.clear();
        self.post(message, reply);
        SubmitOutcome::Sent
    }

    /// Post a suggested question and schedule its dedicated reply.
    /// The draft is left untouched.
    pub fn select_quick_reply(&mut self, quick_reply: QuickReply) -> SubmitOutcome {
        if !self.is_open() {
            return SubmitOutcome::Closed;
        }
        if !self.suggestions_visible() {
            return SubmitOutcome::SuggestionsHidden;
        }
        let Ok(message) = Message::user(quick_reply.question()) else {
            return SubmitOutcome::Empty;
        };
        debug!(?quick_reply, "quick reply selected");
        self.post(message, quick_reply.reply());
        SubmitOutcome::Sent
    }

    fn post(&mut self, message: Message, reply: &'static str) {
        self.lock_transcript().append(message);

        let transcript = Arc::clone(&self.transcript);
        let listeners = Arc::clone(&self.listeners);
        let handle = self
            .scheduler
            .schedule(reply, move |text| deliver(&transcript, &listeners, &text));

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn suggestions_visible(&self) -> bool {
        self.transcript_len() < SUGGESTION_THRESHOLD
    }

    /// Buttons currently on screen.
    #[must_use]
    pub fn suggestions(&self) -> &'static [QuickReply] {
        if self.suggestions_visible() { &QuickReply::ALL } else { &[] }
    }

    /// Snapshot of the transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<Message> {
        self.lock_transcript().messages().to_vec()
    }

    #[must_use]
    pub fn transcript_len(&self) -> usize {
        self.lock_transcript().len()
    }

    /// Run `f` against the live transcript under the lock.
    pub fn with_transcript<R>(&self, f: impl FnOnce(&Transcript) -> R) -> R {
        f(&self.lock_transcript())
    }

    // -------------------------------------------------------------------------
    // In-flight replies
    // -------------------------------------------------------------------------

    /// Receive every assistant reply as it is delivered.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Wait until every in-flight reply has landed.
    pub async fn settle(&mut self) {
        for handle in std::mem::take(&mut self.pending) {
            match handle.wait().await {
                Ok(()) | Err(ReplyError::Cancelled) => {}
                Err(e) => warn!(error = %e, "reply task failed"),
            }
        }
    }

    /// Cancel every in-flight reply.
    pub fn teardown(&mut self) {
        let pending = self.pending_replies();
        for handle in self.pending.drain(..) {
            handle.cancel();
        }
        info!(cancelled = pending, "assistant torn down");
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn deliver(transcript: &Mutex<Transcript>, listeners: &Mutex<Vec<mpsc::UnboundedSender<Message>>>, text: &str) {
    let Ok(message) = Message::assistant(text) else {
        warn!("dropping empty assistant reply");
        return;
    };
    let len = {
        let mut transcript = transcript.lock().unwrap_or_else(PoisonError::into_inner);
        transcript.append(message.clone()).len()
    };
    debug!(messages = len, "reply delivered");

    listeners
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .retain(|tx| tx.send(message.clone()).is_ok());
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
