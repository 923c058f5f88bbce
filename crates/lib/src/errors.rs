use thiserror::Error;

/// Custom error types for the model-call boundary.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the model API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize the model API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("The model API returned an error: {0}")]
    Api(String),
    #[error("The model returned no usable output: {0}")]
    EmptyResponse(String),
}
