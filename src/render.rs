//! Plain-text rendering for the terminal front-end.
//!
//! Pure string builders so the binary stays a thin I/O loop and the
//! layout can be tested without a terminal.

use std::fmt::Write;

use crate::assistant::quick_reply::QuickReply;
use crate::assistant::transcript::{Message, Role};
use crate::assistant::widget::ASSISTANT_TITLE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleDisplay {
    pub label: &'static str,
    pub indent: usize,
}

/// Assistant messages sit flush left, user messages are pushed right.
#[must_use]
pub fn role_display(role: Role) -> RoleDisplay {
    match role {
        Role::Assistant => RoleDisplay { label: "assistant", indent: 0 },
        Role::User => RoleDisplay { label: "you", indent: 8 },
    }
}

#[must_use]
pub fn header() -> String {
    format!("=== {ASSISTANT_TITLE} ===")
}

#[must_use]
pub fn message_line(message: &Message) -> String {
    let display = role_display(message.role());
    format!("{:indent$}{}> {}", "", display.label, message.text(), indent = display.indent)
}

#[must_use]
pub fn transcript<'a>(messages: impl IntoIterator<Item = &'a Message>) -> String {
    let mut out = String::new();
    for message in messages {
        let _ = writeln!(out, "{}", message_line(message));
    }
    out
}

/// Suggestion panel, or an empty string when there is nothing to show.
#[must_use]
pub fn suggestions(quick_replies: &[QuickReply]) -> String {
    if quick_replies.is_empty() {
        return String::new();
    }
    let mut out = String::from("Suggested questions:\n");
    for (i, qr) in quick_replies.iter().enumerate() {
        let _ = writeln!(out, "  /{} {}", i + 1, qr.question());
    }
    out
}

#[must_use]
pub fn help() -> &'static str {
    "commands: /open /close /toggle /1-/4 /transcript /help /quit; anything else is sent as a message"
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
