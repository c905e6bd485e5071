// src/generate/extract.rs
//! JSON extraction from free-form model replies. This is the one fragile
//! parse in the pipeline, so it is a pure function over the raw text.
//!
//! Preference order: a fenced ```json block; otherwise the span from the
//! first `{` to the last `}`. Note the fallback takes that whole span
//! verbatim, so a reply with several brace groups in prose will not parse.

use anyhow::{bail, Context, Result};

use crate::generate::GenerationResult;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Slice the JSON payload out of a raw reply. Errors only when no candidate
/// span exists; whether the span is valid JSON is the parser's business.
pub fn extract_json(raw: &str) -> Result<&str> {
    if let Some(open) = raw.find(FENCE_OPEN) {
        let rest = &raw[open + FENCE_OPEN.len()..];
        let fenced = match rest.find(FENCE_CLOSE) {
            Some(close) => &rest[..close],
            // Unterminated fence: take the remainder.
            None => rest,
        };
        return Ok(fenced.trim());
    }

    let start = raw.find('{').context("reply contains no JSON object")?;
    let end = raw.rfind('}').context("reply contains no closing brace")?;
    if end < start {
        bail!("reply contains no JSON object");
    }
    Ok(raw[start..=end].trim())
}

/// Extract and parse a reply into a `GenerationResult`. Any failure is fatal
/// for the run; the caller propagates it.
pub fn parse_reply(raw: &str) -> Result<GenerationResult> {
    let json = extract_json(raw)?;
    serde_json::from_str(json).context("parsing generation reply as JSON")
}
