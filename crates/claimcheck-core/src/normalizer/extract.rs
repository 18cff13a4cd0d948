//! Best-effort extractor — field-by-field scraping when strict parsing fails.
//!
//! Every string-valued field of the payload is a candidate, `result` first.
//! Candidates that parse as JSON objects are searched by fuzzy key name;
//! candidates that do not parse are scraped with regexes. Findings are merged
//! into an accumulator:
//!
//! | field | merge rule |
//! |-------|-----------|
//! | justification | first found wins |
//! | decision | first found wins |
//! | amount | last found wins |
//!
//! Scanning stops once a justification and a non-zero amount are both known.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::coerce::{parse_number, stringify};
use crate::types::{Decision, NormalizedRecord, Sex};

/// Justification used when no candidate yields one.
pub const DEFAULT_JUSTIFICATION: &str = "No justification provided by server.";

static JUSTIFICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""justification"\s*:\s*"((?s:.*?))""#).unwrap());
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""amount"\s*:\s*(-?\d+(?:\.\d+)?)"#).unwrap());
static DECISION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)"decision"\s*:\s*"(approved|rejected)""#).unwrap());

/// Assemble a record from whatever can be scraped out of `raw`. Never fails.
pub fn extract(raw: &Value) -> NormalizedRecord {
    let mut found = Findings::default();

    if let Some(obj) = raw.as_object() {
        for candidate in candidates(obj) {
            match serde_json::from_str::<Value>(candidate) {
                Ok(Value::Object(parsed)) => found.absorb_object(&parsed),
                Ok(_) => {}
                Err(_) => found.absorb_text(candidate),
            }
            if found.is_complete() {
                break;
            }
        }
    }

    found.finish()
}

/// `result` first when it is text, then every other string field in order.
fn candidates(obj: &Map<String, Value>) -> Vec<&str> {
    let lead = obj.get("result").and_then(Value::as_str);
    let rest = obj
        .iter()
        .filter(|(key, _)| key.as_str() != "result")
        .filter_map(|(_, value)| value.as_str());
    lead.into_iter().chain(rest).collect()
}

#[derive(Debug, Default)]
struct Findings {
    justification: String,
    amount: f64,
    decision: Option<Decision>,
}

impl Findings {
    fn absorb_object(&mut self, obj: &Map<String, Value>) {
        if self.justification.is_empty() {
            self.justification = find_by_key(obj, "justification");
        }
        if let Some(amount) = parse_number(&find_by_key(obj, "amount")) {
            self.amount = amount;
        }
        if self.decision.is_none() {
            self.decision = Decision::parse(&find_by_key(obj, "decision"));
        }
    }

    fn absorb_text(&mut self, text: &str) {
        if self.justification.is_empty() {
            if let Some(caps) = JUSTIFICATION_RE.captures(text) {
                self.justification = caps[1].replace("\\n", "\n").replace("\\\"", "\"");
            }
        }
        if let Some(amount) = AMOUNT_RE
            .captures(text)
            .and_then(|caps| parse_number(&caps[1]))
        {
            self.amount = amount;
        }
        if self.decision.is_none() {
            self.decision = DECISION_RE
                .captures(text)
                .and_then(|caps| Decision::parse(&caps[1]));
        }
    }

    fn is_complete(&self) -> bool {
        !self.justification.is_empty() && self.amount != 0.0
    }

    fn finish(self) -> NormalizedRecord {
        NormalizedRecord {
            name: String::new(),
            age: String::new(),
            sex: Sex::default(),
            decision: self.decision.unwrap_or(Decision::Rejected),
            amount: self.amount,
            justification: if self.justification.is_empty() {
                DEFAULT_JUSTIFICATION.to_string()
            } else {
                self.justification
            },
        }
    }
}

/// Stringified value of the first field whose lower-cased name contains `needle`.
fn find_by_key(obj: &Map<String, Value>, needle: &str) -> String {
    obj.iter()
        .find(|(key, _)| key.to_lowercase().contains(needle))
        .map(|(_, value)| stringify(value))
        .unwrap_or_default()
}
