//! Suggested questions and their dedicated replies.
//!
//! This table is separate from the intent classifier: a quick reply
//! resolves by its category, never by re-running substring rules over
//! the question text.

use super::intent::first_match;

/// One of the four suggestion buttons, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuickReply {
    SellProcess,
    LicenseTypes,
    Cost,
    Security,
}

impl QuickReply {
    pub const ALL: [Self; 4] = [Self::SellProcess, Self::LicenseTypes, Self::Cost, Self::Security];

    /// Button label, posted verbatim as the user's message.
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::SellProcess => "How do I sell my license?",
            Self::LicenseTypes => "What types of licenses can I sell?",
            Self::Cost => "How much does it cost?",
            Self::Security => "Is it secure?",
        }
    }

    #[must_use]
    pub const fn reply(self) -> &'static str {
        match self {
            Self::SellProcess => {
                "To sell your license, create an account, verify ownership, set a price, and list it. \
We handle secure transactions and transfers!"
            }
            Self::LicenseTypes => {
                "We support most major software licenses including Microsoft, Adobe, Autodesk, and many more. \
Both perpetual and subscription licenses can be sold."
            }
            Self::Cost => {
                "Our fee is just 8% per successful transaction. There are no listing fees or monthly charges \
to use our platform."
            }
            Self::Security => {
                "Absolutely! We use bank-level encryption, secure escrow for all payments, and verify all \
licenses before they're listed."
            }
        }
    }

    /// 1-based button position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Match a label back to its button, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_question(label: &str) -> Option<Self> {
        let label = label.trim();
        first_match(&Self::ALL, |qr| qr.question().eq_ignore_ascii_case(label)).copied()
    }
}

#[cfg(test)]
#[path = "quick_reply_test.rs"]
mod tests;
