//! # anyrich-cli
//!
//! The run-once entry point: read a JSON file of records, enrich each one
//! with AI metadata, and publish the result to the search index.

mod config;

use anyhow::{anyhow, bail, Result};
use anyrich::{
    process_all,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    AlgoliaPublisher, Publisher,
};
use clap::Parser;
use config::Config;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Enrich records with AI metadata and publish them to a search index", long_about = None)]
struct Cli {
    /// Path to the JSON file containing the records to enrich
    #[arg(required = true)]
    source: PathBuf,
    /// Target index name, overriding ALGOLIA_INDEX_NAME
    #[arg(long)]
    index: Option<String>,
    /// Enrich records but skip the upload to the search index
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let ai_provider = build_ai_provider(&config)?;

    println!("📄 Enriching records from '{}'...", cli.source.display());
    let enriched = process_all(ai_provider.as_ref(), &cli.source).await;

    if enriched.is_empty() {
        println!("⚠️ No records to publish.");
        return Ok(());
    }
    println!("✅ Enriched {} records.", enriched.len());

    if cli.dry_run {
        info!("Dry run requested, skipping publish");
        println!("🔎 Dry run: {} records ready for upload.", enriched.len());
        return Ok(());
    }

    let index_name = cli
        .index
        .or(config.algolia_index_name)
        .ok_or_else(|| anyhow!("ALGOLIA_INDEX_NAME is not set and --index was not given"))?;
    let app_id = config
        .algolia_app_id
        .ok_or_else(|| anyhow!("ALGOLIA_APP_ID is not set"))?;
    let api_key = config
        .algolia_api_key
        .ok_or_else(|| anyhow!("ALGOLIA_ADMIN_API_KEY is not set"))?;

    let publisher = AlgoliaPublisher::new(app_id, api_key, index_name.clone())?;
    let receipt = publisher.publish(&enriched).await?;

    match receipt.task_id {
        Some(task_id) => println!(
            "🚀 Published {} records to '{index_name}' (task {task_id}).",
            receipt.object_count
        ),
        None => println!("🚀 Nothing was uploaded to '{index_name}'."),
    }

    Ok(())
}

fn build_ai_provider(config: &Config) -> Result<Box<dyn AiProvider>> {
    match config.ai_provider.as_str() {
        "gemini" => {
            let api_key = config
                .ai_api_key
                .clone()
                .ok_or_else(|| anyhow!("AI_API_KEY is required for the gemini provider"))?;
            Ok(Box::new(GeminiProvider::new(
                config.ai_api_url.clone(),
                api_key,
            )?))
        }
        "local" => Ok(Box::new(LocalAiProvider::new(
            config.ai_api_url.clone(),
            config.ai_api_key.clone(),
            config.ai_model.clone(),
        )?)),
        other => bail!("Unsupported AI provider: {other}"),
    }
}
