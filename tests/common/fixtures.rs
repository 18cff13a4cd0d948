//! Payload corpora used across harnesses.
//!
//! Every shape here has been seen coming back from the evaluation service.
//! The strict shapes all wrap [`VALID_RECORD`] somehow; the best-effort
//! shapes cannot be decoded as a whole but still carry scrapeable fields.

use serde_json::{json, Value};

/// The canonical well-formed answer.
pub const VALID_RECORD: &str = r#"{"name":"Anita Rao","age":"46","sex":"F","decision":"approved","amount":125000,"justification":"Knee replacement is covered under section 3.1 after the 24-month waiting period."}"#;

pub const VALID_JUSTIFICATION: &str =
    "Knee replacement is covered under section 3.1 after the 24-month waiting period.";

/// A job envelope whose `result` was printed as a Python dict, with the
/// record inside it pretty-printed JSON. Neither strategy of the quote
/// tolerant decoder can repair it.
pub const PYTHON_REPR_ENVELOPE: &str = r#"{'jobId': 'job-42', 'result': '{\n  "name": "Anita Rao",\n  "age": "46",\n  "decision": "approved",\n  "amount": 125000,\n  "justification": "Pre-existing condition\ndeclared at enrolment."\n}'}"#;

pub fn valid_record() -> Value {
    serde_json::from_str(VALID_RECORD).unwrap()
}

// ---------------------------------------------------------------------------
// Shapes the strict path must recover exactly
// ---------------------------------------------------------------------------

pub fn direct() -> Value {
    valid_record()
}

pub fn result_object() -> Value {
    json!({ "success": true, "result": valid_record() })
}

pub fn result_string() -> Value {
    json!({ "success": true, "result": VALID_RECORD })
}

pub fn result_single_quoted() -> Value {
    json!({ "success": true, "result": VALID_RECORD.replace('"', "'") })
}

pub fn result_escaped_quotes() -> Value {
    json!({ "result": VALID_RECORD.replace('"', "\\\"") })
}

pub fn result_double_escaped_quotes() -> Value {
    json!({ "result": VALID_RECORD.replace('"', "\\\\\"") })
}

pub fn result_object_with_string_result() -> Value {
    json!({ "result": { "result": VALID_RECORD } })
}

pub fn result_string_with_string_result() -> Value {
    let envelope = json!({ "jobId": "job-42", "status": "done", "result": VALID_RECORD });
    json!({ "success": true, "result": envelope.to_string() })
}

/// Stringified job envelope whose record sits under a key other than `result`.
pub fn result_string_with_record_under_other_key() -> Value {
    let envelope = json!({ "jobId": "job-42", "payload": VALID_RECORD });
    json!({ "success": true, "result": envelope.to_string() })
}

pub fn result_string_with_record_object_under_other_key() -> Value {
    let envelope = json!({ "jobId": "job-42", "data": valid_record() });
    json!({ "result": envelope.to_string() })
}

pub fn record_under_other_key() -> Value {
    json!({ "status": "ok", "output": VALID_RECORD })
}

pub fn record_object_under_other_key() -> Value {
    json!({ "status": "ok", "data": valid_record() })
}

// ---------------------------------------------------------------------------
// Shapes only the best-effort path can do anything with
// ---------------------------------------------------------------------------

pub fn python_repr_envelope() -> Value {
    json!({ "success": true, "result": PYTHON_REPR_ENVELOPE })
}

pub fn nothing_recognisable() -> Value {
    json!({ "status": "error", "message": "model overloaded", "retryAfter": 30 })
}

pub fn invalid_decision() -> Value {
    let mut record = valid_record();
    record["decision"] = json!("maybe");
    json!({ "result": record.to_string() })
}

pub fn unavailable_amount() -> Value {
    let mut record = valid_record();
    record["amount"] = json!("N/A");
    record
}
