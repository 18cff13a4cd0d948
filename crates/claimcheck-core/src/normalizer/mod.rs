//! Normalizer — reduces an upstream payload to a [`NormalizedRecord`](crate::NormalizedRecord).
//!
//! ```text
//! raw payload ──► strict::normalize ──► record            (Confidence::Strict)
//!                        │
//!                        └─ none ──► extract::extract ──► record (Confidence::BestEffort)
//! ```
//!
//! Nothing in this module returns an error: an unrecognisable payload is
//! resolved to the best-effort defaults.

pub mod coerce;
pub mod decode;
pub mod extract;
pub mod strict;

pub use coerce::coerce;
pub use decode::decode;
pub use extract::{extract, DEFAULT_JUSTIFICATION};
pub use strict::normalize;

use serde_json::Value;

use crate::types::{Confidence, Resolution};

/// Payload characters included in the diagnostic logged on strict failure.
const PREVIEW_CHARS: usize = 256;

/// Run the strict path, falling back to best-effort extraction.
pub fn resolve(raw: &Value) -> Resolution {
    if let Some(record) = normalize(raw) {
        return Resolution {
            record,
            confidence: Confidence::Strict,
        };
    }

    tracing::warn!(
        payload = %preview(raw),
        "unable to parse response strictly, using best-effort extraction"
    );
    Resolution {
        record: extract(raw),
        confidence: Confidence::BestEffort,
    }
}

fn preview(raw: &Value) -> String {
    let text = raw.to_string();
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text,
    }
}
