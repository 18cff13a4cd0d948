//! Quote-tolerant JSON decoding for candidate strings.
//!
//! The evaluation service sometimes emits a textual object notation instead
//! of canonical JSON: single-quoted keys and values, or quotes that are still
//! backslash-escaped from an earlier round of stringification. [`decode`]
//! retries the parse under a fixed sequence of character substitutions.

use serde_json::Value;
use std::borrow::Cow;

/// One rewrite applied to a candidate string before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStrategy {
    /// Parse the input unchanged.
    AsIs,
    /// Replace every `'` with `"`. Apostrophes inside values are rewritten
    /// too, which can break or alter otherwise valid text.
    SingleQuotes,
    /// Replace every `\"` with `"`.
    EscapedQuotes,
    /// Replace every `\\"` with `"`, for quotes escaped by two rounds of
    /// stringification. Without this step such candidates would only be
    /// reachable by best-effort extraction, so it widens what the strict
    /// path accepts.
    DoubleEscapedQuotes,
}

impl QuoteStrategy {
    /// Attempt order. The first strategy whose output parses wins.
    pub const ORDER: [QuoteStrategy; 4] = [
        QuoteStrategy::AsIs,
        QuoteStrategy::SingleQuotes,
        QuoteStrategy::EscapedQuotes,
        QuoteStrategy::DoubleEscapedQuotes,
    ];

    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            QuoteStrategy::AsIs => Cow::Borrowed(input),
            QuoteStrategy::SingleQuotes => Cow::Owned(input.replace('\'', "\"")),
            QuoteStrategy::EscapedQuotes => Cow::Owned(input.replace("\\\"", "\"")),
            QuoteStrategy::DoubleEscapedQuotes => Cow::Owned(input.replace("\\\\\"", "\"")),
        }
    }
}

/// Parse `input` as JSON, falling back through [`QuoteStrategy::ORDER`].
///
/// Returns `None` when no strategy yields valid JSON. The result may be any
/// JSON value; callers decide whether a non-object is useful.
pub fn decode(input: &str) -> Option<Value> {
    QuoteStrategy::ORDER.iter().find_map(|strategy| {
        let candidate = strategy.apply(input);
        match serde_json::from_str::<Value>(&candidate) {
            Ok(value) => {
                tracing::trace!(?strategy, "candidate decoded");
                Some(value)
            }
            Err(_) => None,
        }
    })
}
