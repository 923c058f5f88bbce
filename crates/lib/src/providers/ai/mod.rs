pub mod gemini;
pub mod local;

use crate::errors::ModelError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a generative-text provider.
///
/// This trait defines a common interface for producing completions from
/// different model backends (e.g., Gemini, OpenAI-compatible local
/// servers), so the enrichment pipeline can be tested with stubs and
/// never depends on process-wide client state.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result is the raw text of the model's reply. A response that
    /// carries no usable output is an error, not an empty string.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ModelError>;
}

dyn_clone::clone_trait_object!(AiProvider);
