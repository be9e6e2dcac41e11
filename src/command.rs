//! Terminal input parsing.
//!
//! Every stdin line is either a slash command, a suggested question typed
//! out in full, or free text to commit as a message.

use crate::assistant::quick_reply::QuickReply;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Toggle,
    /// `/1`..`/4`.
    Suggestion(QuickReply),
    /// A line identical to a suggestion label.
    Label(QuickReply),
    Transcript,
    Help,
    Quit,
    Unknown(String),
    Say(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(name) = trimmed.strip_prefix('/') else {
            return QuickReply::from_question(trimmed).map_or_else(|| Self::Say(line.to_string()), Self::Label);
        };

        match name {
            "open" => Self::Open,
            "close" => Self::Close,
            "toggle" => Self::Toggle,
            "transcript" => Self::Transcript,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => other
                .parse::<usize>()
                .ok()
                .and_then(QuickReply::from_index)
                .map_or_else(|| Self::Unknown(trimmed.to_string()), Self::Suggestion),
        }
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
