//! Command implementations for the `claimcheck` binary.
//!
//! Each command reads a raw payload from somewhere, resolves it, and prints
//! either the text summary or the JSON form of the [`Resolution`].

use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{ClaimSubmission, EvaluationClient};
use crate::config::Config;
use crate::render::render_text;
use crate::{resolve, Resolution};

/// How a resolution is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a top-level payload. Malformed JSON here is a transport-level
/// failure, not something the normalizer is asked to repair.
pub fn decode_payload(text: &str) -> anyhow::Result<Resolution> {
    let raw: serde_json::Value =
        serde_json::from_str(text).context("response body is not valid JSON")?;
    Ok(resolve(&raw))
}

/// `claimcheck decode [PATH]` — resolve a saved payload (stdin when `None`).
pub fn run_decode(config: &Config, path: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
    };
    let resolution = decode_payload(&text)?;
    print!("{}", format_resolution(&resolution, config, format)?);
    Ok(())
}

/// Arguments of `claimcheck submit`.
#[derive(Debug, Clone)]
pub struct SubmitArgs {
    pub file: PathBuf,
    pub query: String,
    pub endpoint: Option<String>,
}

/// `claimcheck submit` — send the form, resolve the answer.
pub async fn run_submit(config: &Config, args: SubmitArgs, format: OutputFormat) -> anyhow::Result<()> {
    let endpoint = args
        .endpoint
        .as_deref()
        .unwrap_or(config.upstream.endpoint.as_str());
    let client = EvaluationClient::new(endpoint, Duration::from_secs(config.upstream.timeout_secs))?;
    let submission = ClaimSubmission::from_path(&args.file, args.query).await?;

    let raw = client.submit(&submission).await?;
    let resolution = resolve(&raw);
    tracing::info!(
        confidence = %resolution.confidence,
        decision = %resolution.record.decision,
        "claim resolved"
    );
    print!("{}", format_resolution(&resolution, config, format)?);
    Ok(())
}

pub fn format_resolution(
    resolution: &Resolution,
    config: &Config,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(resolution, &config.display)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(resolution)?;
            json.push('\n');
            Ok(json)
        }
    }
}
