//! claimcheck — submit insurance claims and normalise the decisions.
//!
//! This crate re-exports the workspace layers so that integration tests and
//! the binary can import them from one place, and holds the command
//! implementations behind the CLI.
//!
//! # Architecture
//!
//! ```text
//! submit ──► client ──► raw payload ──► normalizer ──► render
//!                            ▲
//! decode ────────────────────┘
//! ```
//!
//! The normalizer is synchronous. Only `submit` starts an async runtime.

pub mod commands;

pub use claimcheck_client as client;
pub use claimcheck_core::{config, normalizer, render};
pub use claimcheck_core::{resolve, Confidence, Decision, NormalizedRecord, Resolution, Sex};
