//! The embedded SoftSell assistant.
//!
//! ARCHITECTURE
//! ============
//! - `transcript`: append-only message log
//! - `intent`: ordered keyword rules for free-text input
//! - `quick_reply`: the suggestion buttons and their own replies
//! - `scheduler`: simulated reply latency as cancellable tasks
//! - `widget`: window state and the submit / quick-reply flows

pub mod intent;
pub mod quick_reply;
pub mod scheduler;
pub mod transcript;
pub mod widget;

pub use quick_reply::QuickReply;
pub use widget::{ChatWidget, SubmitOutcome, WindowState};
