//! Strict normalizer — bounded search for a fully valid record.
//!
//! The evaluation service may return the record directly, wrap it in a
//! `result` field, double-wrap it, or stringify any of those layers. The
//! search visits a fixed list of locations in order and never descends more
//! than [`MAX_RESULT_DEPTH`] `result` levels below the payload root:
//!
//! 1. the root object itself;
//! 2. `root.result`: a string is decoded and coerced, then its own `result`
//!    is tried; an object is coerced. Either way the fields of the decoded
//!    object are then scanned;
//! 3. a flat scan of the root's fields.
//!
//! A flat scan looks at every field value: strings are decoded and coerced
//! (one `result` level further down is also tried while the depth bound
//! allows), objects are coerced.

use serde_json::{Map, Value};
use std::borrow::Cow;

use super::coerce::coerce;
use super::decode::decode;
use crate::types::NormalizedRecord;

/// How many nested `result` layers below the root are inspected.
pub const MAX_RESULT_DEPTH: usize = 2;

/// Recover a fully validated record from `raw`, or `None`.
pub fn normalize(raw: &Value) -> Option<NormalizedRecord> {
    let root = raw.as_object()?;

    if let Some(record) = coerce(root) {
        tracing::debug!(location = "root", "strict record recovered");
        return Some(record);
    }

    match root.get("result") {
        Some(Value::String(text)) => {
            // A miss falls through to the root scan.
            if let Some(Value::Object(outer)) = decode(text) {
                if let Some(record) = unwrap_result(&outer, 1, "result") {
                    return Some(record);
                }
                if let Some(record) = scan(&outer, 1, "result") {
                    return Some(record);
                }
            }
        }
        Some(Value::Object(outer)) => {
            if let Some(record) = coerce(outer) {
                tracing::debug!(location = "result", "strict record recovered");
                return Some(record);
            }
            if let Some(record) = scan(outer, 1, "result") {
                return Some(record);
            }
        }
        _ => {}
    }

    scan(root, 0, "root")
}

/// Coerce `obj`, then follow its `result` field while `depth` allows.
fn unwrap_result(obj: &Map<String, Value>, depth: usize, location: &str) -> Option<NormalizedRecord> {
    if let Some(record) = coerce(obj) {
        tracing::debug!(location, depth, "strict record recovered");
        return Some(record);
    }
    if depth >= MAX_RESULT_DEPTH {
        return None;
    }
    let inner = obj.get("result").and_then(as_object)?;
    unwrap_result(&inner, depth + 1, &format!("{location}.result"))
}

/// Flat pass over the fields of `obj`, which sits `depth` levels below the
/// root. First success wins.
fn scan(obj: &Map<String, Value>, depth: usize, location: &str) -> Option<NormalizedRecord> {
    obj.iter().find_map(|(key, value)| match value {
        Value::String(text) => match decode(text) {
            Some(Value::Object(parsed)) => {
                unwrap_result(&parsed, depth + 1, &format!("{location}.{key}"))
            }
            _ => None,
        },
        Value::Object(nested) => {
            let record = coerce(nested)?;
            tracing::debug!(location = %format!("{location}.{key}"), "strict record recovered");
            Some(record)
        }
        _ => None,
    })
}

/// An object candidate: decoded from text, or borrowed as-is.
fn as_object(value: &Value) -> Option<Cow<'_, Map<String, Value>>> {
    match value {
        Value::Object(map) => Some(Cow::Borrowed(map)),
        Value::String(text) => match decode(text)? {
            Value::Object(map) => Some(Cow::Owned(map)),
            _ => None,
        },
        _ => None,
    }
}
