//! Transcript store — ordered, append-only message log.
//!
//! DESIGN
//! ======
//! Insertion order is display order. Messages expose accessors only, so
//! nothing downstream can rewrite text or role after creation, and the
//! store itself offers no way to remove or reorder entries.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("message text is empty")]
    EmptyText,
}

// =============================================================================
// MESSAGE
// =============================================================================

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    role: Role,
    text: String,
    timestamp: f64,
}

impl Message {
    /// Build a message, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::EmptyText`] if nothing is left after trimming.
    pub fn new(role: Role, text: &str) -> Result<Self, TranscriptError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranscriptError::EmptyText);
        }
        Ok(Self { id: Uuid::new_v4(), role, text: text.to_owned(), timestamp: now_millis() })
    }

    /// # Errors
    ///
    /// See [`Message::new`].
    pub fn user(text: &str) -> Result<Self, TranscriptError> {
        Self::new(Role::User, text)
    }

    /// # Errors
    ///
    /// See [`Message::new`].
    pub fn assistant(text: &str) -> Result<Self, TranscriptError> {
        Self::new(Role::Assistant, text)
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

#[allow(clippy::cast_precision_loss)]
fn now_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_millis() as f64)
}

// =============================================================================
// TRANSCRIPT
// =============================================================================

#[derive(Clone, Debug, Default, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript pre-seeded with one assistant greeting.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::EmptyText`] for a blank greeting.
    pub fn seeded(greeting: &str) -> Result<Self, TranscriptError> {
        let mut transcript = Self::new();
        transcript.append(Message::assistant(greeting)?);
        Ok(transcript)
    }

    /// Append to the end and return the updated sequence.
    pub fn append(&mut self, message: Message) -> &[Message] {
        self.messages.push(message);
        &self.messages
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Pretty-printed JSON export of the message list.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.messages)
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;
