//! # Model Response Extraction
//!
//! Generative models rarely return clean structured data. A response may
//! arrive wrapped in a fenced code block, padded with conversational
//! prose, or both. This module isolates the JSON object embedded in raw
//! model text and normalizes its keys, failing loudly only when no
//! parseable object can be located at all.

use crate::types::ParsedPayload;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// How much of the offending text to keep in an error message.
const SNIPPET_LEN: usize = 80;

/// Custom error types for payload extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("No JSON object found in model output: '{snippet}'")]
    NoJsonObject { snippet: String },
    #[error("Failed to parse model output as JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The payload keys as the model emits them, before normalization.
#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    keywords: Option<Value>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sentiment: Option<String>,
}

/// Extracts the structured payload embedded in raw model output.
///
/// The fence strip is best-effort: an absent marker is not a failure. The
/// object boundaries are then located as the first `{` and the last `}`,
/// which tolerates prose on either side of the payload.
pub fn extract(raw_text: &str) -> Result<ParsedPayload, ExtractionError> {
    let trimmed = raw_text.trim();
    let cleaned = trimmed
        .strip_prefix("```json")
        .unwrap_or(trimmed)
        .strip_suffix("```")
        .unwrap_or(trimmed)
        .trim();

    let (start, end) = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => (start, end),
        _ => {
            return Err(ExtractionError::NoJsonObject {
                snippet: cleaned.chars().take(SNIPPET_LEN).collect(),
            })
        }
    };

    let parsed: RawPayload = serde_json::from_str(&cleaned[start..=end])?;

    Ok(ParsedPayload {
        summary: parsed.summary.filter(|text| !text.trim().is_empty()),
        keywords: normalize_keywords(parsed.keywords),
        category: parsed.category.filter(|text| !text.trim().is_empty()),
        sentiment: parsed.sentiment.filter(|text| !text.trim().is_empty()),
    })
}

/// Normalizes the `keywords` field into an ordered list.
///
/// The prompt asks for a single comma-joined string, but a model sometimes
/// returns a JSON array instead; both forms are accepted. Anything else
/// normalizes to an empty list.
fn normalize_keywords(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::String(joined)) => joined
            .split(',')
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
