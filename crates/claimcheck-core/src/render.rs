//! Presentation of a [`Resolution`] for the terminal.
//!
//! Amounts use Indian digit grouping: the last three integer digits form one
//! group, every group above that has two (`12,34,567.891`).

use std::fmt::Write as _;

use crate::config::DisplayConfig;
use crate::types::{Confidence, Resolution};

/// Format `amount` with Indian grouping and at most `fraction_digits`
/// fraction digits. Trailing fractional zeros are dropped.
pub fn format_amount(amount: f64, fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", fraction_digits, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let grouped = group_indian(int_part);
    let negative = amount.is_sign_negative() && (grouped != "0" || !frac_part.is_empty());

    let mut out = String::with_capacity(grouped.len() + frac_part.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Multi-line human summary of a resolution.
pub fn render_text(resolution: &Resolution, display: &DisplayConfig) -> String {
    let record = &resolution.record;
    let mut out = String::new();

    let _ = writeln!(out, "Decision       {}", record.decision.label());
    let _ = writeln!(
        out,
        "Amount         {} {}",
        display.currency_symbol,
        format_amount(record.amount, display.fraction_digits)
    );
    if !record.name.is_empty() {
        let _ = writeln!(out, "Name           {}", record.name);
    }
    if !record.age.is_empty() {
        let _ = writeln!(out, "Age            {}", record.age);
    }
    let _ = writeln!(out, "Justification");
    for line in record.justification.lines() {
        let _ = writeln!(out, "  {line}");
    }
    if resolution.confidence == Confidence::BestEffort {
        let _ = writeln!(
            out,
            "\n(note: the service response was malformed; fields were recovered on a best-effort basis)"
        );
    }
    out
}
