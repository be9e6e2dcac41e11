//! Intent classifier — ordered substring rules, first match wins.
//!
//! DESIGN
//! ======
//! Rules are data: an ordered table of `(keywords, response)` pairs
//! walked by [`first_match`]. Adding, dropping, or reordering an intent
//! is an edit to [`INTENT_RULES`], not to control flow.
//!
//! Input is lowercased before matching; surrounding whitespace does not
//! change the result. Callers reject blank input before classifying.

use tracing::debug;

/// Reply used when no rule matches.
pub const FALLBACK_RESPONSE: &str = "Thanks for your message! Our team will get back to you shortly. \
Meanwhile, feel free to explore our FAQ section for more information.";

/// Tag identifying which rule produced a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    License,
    Selling,
    Pricing,
    Security,
}

/// A single classification rule. Matches when the lowercased input
/// contains any of `keywords`.
#[derive(Clone, Copy, Debug)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl IntentRule {
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// Priority order matters: "sell a license" must land on `License`.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::License,
        keywords: &["license"],
        response: "We support various types of software licenses. You can sell enterprise, volume, \
or individual licenses through our platform. Would you like to know more about the process?",
    },
    IntentRule {
        intent: Intent::Selling,
        keywords: &["sell"],
        response: "To sell your license, just create an account, verify your ownership, set a price, \
and list it on our marketplace. We handle the transaction securely!",
    },
    IntentRule {
        intent: Intent::Pricing,
        keywords: &["price", "cost"],
        response: "Our commission is just 8% per successful transaction. There are no listing fees \
or monthly charges.",
    },
    IntentRule {
        intent: Intent::Security,
        keywords: &["security", "safe"],
        response: "Security is our top priority. We use bank-level encryption, secure escrow payments, \
and verify all licenses before listing.",
    },
];

/// Return the first rule satisfying `predicate`, in table order.
pub fn first_match<'r, R>(rules: &'r [R], mut predicate: impl FnMut(&R) -> bool) -> Option<&'r R> {
    rules.iter().find(|rule| predicate(rule))
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Stateless classifier over a fixed rule table.
#[derive(Clone, Copy, Debug)]
pub struct Classifier {
    rules: &'static [IntentRule],
    fallback: &'static str,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(INTENT_RULES, FALLBACK_RESPONSE)
    }
}

impl Classifier {
    #[must_use]
    pub const fn new(rules: &'static [IntentRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Winning rule for `raw`, or `None` when the fallback applies.
    #[must_use]
    pub fn rule_for(&self, raw: &str) -> Option<&'static IntentRule> {
        let normalized = raw.trim().to_lowercase();
        let rules: &'static [IntentRule] = self.rules;
        first_match(rules, |rule| rule.matches(&normalized))
    }

    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<Intent> {
        self.rule_for(raw).map(|rule| rule.intent)
    }

    /// Map raw input text to its reply.
    #[must_use]
    pub fn classify(&self, raw: &str) -> &'static str {
        match self.rule_for(raw) {
            Some(rule) => {
                debug!(intent = ?rule.intent, "classified input");
                rule.response
            }
            None => {
                debug!("no intent matched; using fallback");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;
