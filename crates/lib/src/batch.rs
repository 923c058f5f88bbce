//! # Batch Processing
//!
//! Loads the record collection from a JSON source and runs each record
//! through the content enricher, strictly in input order. One model call
//! is outstanding at a time; the sequencing itself is the ordering
//! guarantee.

use crate::{
    enrich::enrich_record,
    providers::ai::AiProvider,
    types::{EnrichedRecord, Record},
};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

/// Custom error types for loading the record source.
#[derive(Error, Debug)]
pub enum SourceLoadError {
    #[error("Failed to read the record source: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse the record source as a JSON array: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and parses the full record collection from `source` in one step.
pub fn load_records(source: &Path) -> Result<Vec<Record>, SourceLoadError> {
    let raw = std::fs::read_to_string(source)?;
    let records: Vec<Record> = serde_json::from_str(&raw)?;
    Ok(records)
}

/// Enriches every record from `source`, preserving input order.
///
/// An unreadable or unparseable source yields an empty sequence rather
/// than an error; callers treat that as "nothing to publish". Otherwise
/// every input record produces exactly one output record — no filtering —
/// carrying the four `ai_*` fields, defaulted or not. Re-reading an
/// unchanged source with a deterministic provider yields identical
/// output.
pub async fn process_all(ai_provider: &dyn AiProvider, source: &Path) -> Vec<EnrichedRecord> {
    let records = match load_records(source) {
        Ok(records) => records,
        Err(e) => {
            error!("Could not load records from '{}': {e}", source.display());
            return Vec::new();
        }
    };

    info!(
        "Enriching {} records from '{}'",
        records.len(),
        source.display()
    );

    let mut enriched = Vec::with_capacity(records.len());
    for record in &records {
        let record_id = record
            .get("objectID")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>");
        let result = enrich_record(ai_provider, record.get("content"), record_id).await;
        enriched.push(result.merge_onto(record));
    }

    enriched
}
