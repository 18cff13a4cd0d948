//! claimcheck-core — response normalization for claimcheck.
//!
//! The evaluation service answers a claim with JSON whose shape is not
//! guaranteed. This crate reduces whatever comes back to a fixed-shape
//! [`NormalizedRecord`] and renders it for display.
//!
//! # Architecture
//!
//! ```text
//! raw payload ──► normalizer::strict ──┬──► Resolution ──► render
//!                        │             │
//!                        └──► normalizer::extract
//! ```
//!
//! Everything here is synchronous and stateless; I/O lives in
//! `claimcheck-client` and the binary.

pub mod config;
pub mod normalizer;
pub mod render;
pub mod types;

pub use normalizer::resolve;
pub use types::{Confidence, Decision, NormalizedRecord, Resolution, Sex};
