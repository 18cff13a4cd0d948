//! Test builders — ergonomic constructors for expected records and payloads.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use claimcheck_core::normalizer::DEFAULT_JUSTIFICATION;
use claimcheck_core::{Decision, NormalizedRecord, Sex};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`NormalizedRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let expected = RecordBuilder::approved(4500.0, "Covered")
///     .name("Anita Rao")
///     .sex(Sex::F)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: NormalizedRecord,
}

impl RecordBuilder {
    pub fn new(decision: Decision, amount: f64, justification: impl Into<String>) -> Self {
        Self {
            record: NormalizedRecord {
                name: String::new(),
                age: String::new(),
                sex: Sex::M,
                decision,
                amount,
                justification: justification.into(),
            },
        }
    }

    pub fn approved(amount: f64, justification: impl Into<String>) -> Self {
        Self::new(Decision::Approved, amount, justification)
    }

    pub fn rejected(amount: f64, justification: impl Into<String>) -> Self {
        Self::new(Decision::Rejected, amount, justification)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.record.age = age.into();
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.record.sex = sex;
        self
    }

    pub fn build(self) -> NormalizedRecord {
        self.record
    }

    /// The record as the service would send it, canonical JSON object.
    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.record.name,
            "age": self.record.age,
            "sex": self.record.sex.to_string(),
            "decision": self.record.decision.to_string(),
            "amount": self.record.amount,
            "justification": self.record.justification,
        })
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The record every strict fixture in `fixtures.rs` must resolve to.
pub fn expected_valid_record() -> NormalizedRecord {
    RecordBuilder::approved(125000.0, super::fixtures::VALID_JUSTIFICATION)
        .name("Anita Rao")
        .age("46")
        .sex(Sex::F)
        .build()
}

/// The record the best-effort path produces when nothing is recoverable.
pub fn default_record() -> NormalizedRecord {
    RecordBuilder::rejected(0.0, DEFAULT_JUSTIFICATION).build()
}
