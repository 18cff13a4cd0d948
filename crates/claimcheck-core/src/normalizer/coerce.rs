//! Direct coercion of a JSON object into a [`NormalizedRecord`].
//!
//! This is the single validation boundary of the strict path. `decision`,
//! `amount` and `justification` must all be valid or the whole candidate is
//! rejected; `name`, `age` and `sex` always fall back to a safe default.

use serde_json::{Map, Value};

use crate::types::{Decision, NormalizedRecord, Sex};

/// Coerce `obj` into a record, or `None` if a required field is unusable.
pub fn coerce(obj: &Map<String, Value>) -> Option<NormalizedRecord> {
    let decision = obj
        .get("decision")
        .and_then(Value::as_str)
        .and_then(Decision::parse)?;
    let amount = obj.get("amount").and_then(amount_of)?;
    let justification = text_field(obj, "justification");
    if justification.is_empty() {
        return None;
    }

    Some(NormalizedRecord {
        name: text_field(obj, "name"),
        age: text_field(obj, "age"),
        sex: obj
            .get("sex")
            .and_then(Value::as_str)
            .and_then(Sex::parse)
            .unwrap_or_default(),
        decision,
        amount,
        justification,
    })
}

/// Stringified field value, or empty text when absent or null.
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).map(stringify).unwrap_or_default()
}

fn amount_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::Null => None,
        other => parse_number(&stringify(other)),
    }
}

/// Parse a decimal amount. Blank, unparseable and non-finite input is rejected.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render a JSON value the way a loosely typed upstream would print it:
/// strings verbatim, integral numbers without a fraction, arrays joined by
/// commas, objects as an opaque marker, and null as empty text.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
