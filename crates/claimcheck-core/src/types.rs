//! Core types for claimcheck-core.
//!
//! This module defines the fixed-shape [`NormalizedRecord`] that every
//! upstream payload is reduced to, its [`Decision`] and [`Sex`] enums, and the
//! [`Resolution`] wrapper that records which normalization path produced it.

use serde::{Deserialize, Serialize};

/// A validated claim decision, ready for presentation.
///
/// Records produced by the strict path always carry a real decision, a finite
/// amount and a non-empty justification. Records produced by the best-effort
/// path have the same shape but may hold defaults for any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Claimant name. Free text, may be empty.
    pub name: String,
    /// Claimant age, kept as text so non-numeric upstream values survive.
    pub age: String,
    pub sex: Sex,
    pub decision: Decision,
    /// Payable amount. Always finite.
    pub amount: f64,
    pub justification: String,
}

/// Claimant sex as reported by the evaluation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    M,
    F,
}

impl Sex {
    /// Upper-cases `raw` and accepts only `M` or `F`.
    pub fn parse(raw: &str) -> Option<Sex> {
        match raw.to_uppercase().as_str() {
            "M" => Some(Sex::M),
            "F" => Some(Sex::F),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::M => write!(f, "M"),
            Sex::F => write!(f, "F"),
        }
    }
}

/// Outcome of a claim evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// Lower-cases `raw` and accepts only an exact `approved` or `rejected`.
    /// Surrounding whitespace is not trimmed.
    pub fn parse(raw: &str) -> Option<Decision> {
        match raw.to_lowercase().as_str() {
            "approved" => Some(Decision::Approved),
            "rejected" => Some(Decision::Rejected),
            _ => None,
        }
    }

    /// Human-facing badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Approved => write!(f, "approved"),
            Decision::Rejected => write!(f, "rejected"),
        }
    }
}

/// Which normalization path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Every required field was found and validated.
    Strict,
    /// Fields were scraped individually; defaults may be present.
    BestEffort,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Strict => write!(f, "strict"),
            Confidence::BestEffort => write!(f, "best-effort"),
        }
    }
}

/// A record together with the confidence tier of the path that built it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub record: NormalizedRecord,
    pub confidence: Confidence,
}
