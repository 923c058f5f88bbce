//! # Content Enrichment
//!
//! The per-record transformation: one model call, defensive extraction,
//! and failure isolation. A record that cannot be enriched degrades to
//! the all-default [`EnrichmentResult`]; nothing in this module ever
//! aborts the batch.

use crate::{
    extract::extract,
    prompts::{ENRICHMENT_SYSTEM_PROMPT, ENRICHMENT_USER_PROMPT},
    providers::ai::AiProvider,
    types::{Category, EnrichmentResult, Sentiment},
};
use serde_json::Value;
use tracing::{debug, warn};

/// Derives AI metadata for a single record's content.
///
/// Absent or non-text content short-circuits to the default result
/// without a model call. Every failure past that point — a transport or
/// API error, a response with no usable output, or unparseable output —
/// is contained here and resolves to the default result as well.
/// `record_id` only labels the diagnostics.
pub async fn enrich_record(
    ai_provider: &dyn AiProvider,
    content: Option<&Value>,
    record_id: &str,
) -> EnrichmentResult {
    let Some(content) = content.and_then(Value::as_str) else {
        debug!("Record '{record_id}' has no text content, skipping model call");
        return EnrichmentResult::default();
    };

    let user_prompt = ENRICHMENT_USER_PROMPT.replace("{content}", content);
    debug!("Requesting enrichment for record '{record_id}'");

    let raw_response = match ai_provider
        .generate(ENRICHMENT_SYSTEM_PROMPT, &user_prompt)
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Model call failed for record '{record_id}': {e}");
            return EnrichmentResult::default();
        }
    };

    match extract(&raw_response) {
        Ok(payload) => {
            debug!("Enrichment succeeded for record '{record_id}'");
            EnrichmentResult {
                summary: payload.summary,
                keywords: payload.keywords,
                category: payload.category.map(|label| Category::from_label(&label)),
                sentiment: payload.sentiment.map(|label| Sentiment::from_label(&label)),
            }
        }
        Err(e) => {
            warn!("Could not extract enrichment payload for record '{record_id}': {e}");
            EnrichmentResult::default()
        }
    }
}
