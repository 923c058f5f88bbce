//! # CLI Configuration
//!
//! Environment-driven settings for the run-once pipeline. A `.env` file
//! is honored via `dotenvy` before any variable is read. Search-index
//! credentials are optional at load time so a dry run never requires
//! them; `main` checks for them only when it is about to publish.

use anyhow::{bail, Result};
use std::env;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    /// Which AI backend to use: "gemini" or "local".
    pub ai_provider: String,
    pub ai_api_url: String,
    pub ai_api_key: Option<String>,
    pub ai_model: Option<String>,
    pub algolia_app_id: Option<String>,
    pub algolia_api_key: Option<String>,
    pub algolia_index_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let ai_provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
        let ai_model = env::var("AI_MODEL").ok();

        let ai_api_url = match env::var("AI_API_URL") {
            Ok(url) => url,
            Err(_) if ai_provider == "gemini" => {
                let model = ai_model
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                )
            }
            Err(_) => bail!("AI_API_URL must be set for the '{ai_provider}' provider"),
        };

        Ok(Self {
            ai_provider,
            ai_api_url,
            ai_api_key: env::var("AI_API_KEY").ok(),
            ai_model,
            algolia_app_id: env::var("ALGOLIA_APP_ID").ok(),
            algolia_api_key: env::var("ALGOLIA_ADMIN_API_KEY").ok(),
            algolia_index_name: env::var("ALGOLIA_INDEX_NAME").ok(),
        })
    }
}
