//! # Record Enrichment Pipeline
//!
//! This crate enriches a batch of textual records with AI-derived
//! metadata (summary, keywords, category, sentiment) using a configurable
//! AI provider, and publishes the enriched records to a searchable index.
//!
//! The design principle throughout is failure isolation: a single
//! record's enrichment failure degrades that record to default metadata
//! and never aborts the batch, and an unreadable source degrades the
//! batch to "nothing to publish" rather than an error.

pub mod batch;
pub mod enrich;
pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod publish;
pub mod types;

pub use batch::{load_records, process_all, SourceLoadError};
pub use enrich::enrich_record;
pub use errors::ModelError;
pub use extract::{extract, ExtractionError};
pub use providers::ai::AiProvider;
pub use publish::{AlgoliaPublisher, PublishError, PublishReceipt, Publisher};
pub use types::{
    Category, EnrichedRecord, EnrichmentResult, ParsedPayload, Record, Sentiment,
};
