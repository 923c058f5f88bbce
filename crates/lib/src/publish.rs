//! # Search Index Publishing
//!
//! Hands the enriched record collection to a search index: a bulk upload
//! followed by a wait for the asynchronous indexing task to complete. The
//! pipeline itself only depends on the [`Publisher`] trait; the Algolia
//! client below is the production implementation.

use crate::types::EnrichedRecord;
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Custom error types for the publishing stage.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Search index request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("The search index returned an error ({status}): {body}")]
    Api { status: StatusCode, body: String },
    #[error("Indexing task {task_id} did not reach 'published' in time")]
    TaskTimeout { task_id: u64 },
}

/// Summary of a completed publish operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishReceipt {
    /// Number of records uploaded to the index.
    pub object_count: usize,
    /// The indexing task that was waited on, when an upload happened.
    pub task_id: Option<u64>,
}

/// A trait for handing a batch of enriched records to a search index.
///
/// Implementations own the wire protocol; the pipeline only promises an
/// ordered collection in which every record carries the four `ai_*`
/// fields.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, records: &[EnrichedRecord]) -> Result<PublishReceipt, PublishError>;
}

// --- Algolia-specific request and response structures ---

#[derive(Serialize)]
struct BatchRequest<'a> {
    requests: Vec<BatchOperation<'a>>,
}

#[derive(Serialize)]
struct BatchOperation<'a> {
    action: &'static str,
    body: &'a EnrichedRecord,
}

#[derive(Deserialize, Debug)]
struct BatchResponse {
    #[serde(rename = "taskID")]
    task_id: u64,
}

#[derive(Deserialize, Debug)]
struct TaskStatus {
    status: String,
}

// --- Algolia Publisher implementation ---

/// A publisher for the Algolia search REST API.
#[derive(Clone, Debug)]
pub struct AlgoliaPublisher {
    client: ReqwestClient,
    base_url: String,
    app_id: String,
    api_key: String,
    index_name: String,
}

impl AlgoliaPublisher {
    /// Upper bound on task-status polls before giving up.
    const WAIT_ATTEMPTS: u32 = 50;
    const WAIT_INTERVAL: Duration = Duration::from_millis(200);

    /// Creates a publisher against the standard Algolia endpoint for
    /// `app_id`.
    pub fn new(
        app_id: String,
        api_key: String,
        index_name: String,
    ) -> Result<Self, PublishError> {
        let base_url = format!("https://{app_id}-dsn.algolia.net");
        Self::with_base_url(base_url, app_id, api_key, index_name)
    }

    /// Creates a publisher against an explicit endpoint. Tests use this to
    /// target a mock server.
    pub fn with_base_url(
        base_url: String,
        app_id: String,
        api_key: String,
        index_name: String,
    ) -> Result<Self, PublishError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PublishError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            base_url,
            app_id,
            api_key,
            index_name,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{path}", self.base_url))
            .header("X-Algolia-Application-Id", &self.app_id)
            .header("X-Algolia-API-Key", &self.api_key)
    }

    async fn api_error(response: reqwest::Response) -> PublishError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        PublishError::Api { status, body }
    }

    /// Polls the indexing task until the index reports it as published.
    async fn wait_for_task(&self, task_id: u64) -> Result<(), PublishError> {
        let path = format!("1/indexes/{}/task/{task_id}", self.index_name);
        for attempt in 0..Self::WAIT_ATTEMPTS {
            let response = self.request(Method::GET, &path).send().await?;
            if !response.status().is_success() {
                return Err(Self::api_error(response).await);
            }
            let task: TaskStatus = response.json().await?;
            if task.status == "published" {
                debug!("Task {task_id} published after {} polls", attempt + 1);
                return Ok(());
            }
            tokio::time::sleep(Self::WAIT_INTERVAL).await;
        }
        Err(PublishError::TaskTimeout { task_id })
    }
}

#[async_trait]
impl Publisher for AlgoliaPublisher {
    async fn publish(&self, records: &[EnrichedRecord]) -> Result<PublishReceipt, PublishError> {
        if records.is_empty() {
            info!("No records to publish");
            return Ok(PublishReceipt::default());
        }

        let request_body = BatchRequest {
            requests: records
                .iter()
                .map(|record| BatchOperation {
                    action: "addObject",
                    body: record,
                })
                .collect(),
        };

        let path = format!("1/indexes/{}/batch", self.index_name);
        let response = self
            .request(Method::POST, &path)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let batch: BatchResponse = response.json().await?;
        info!(
            "Uploaded {} records to index '{}', waiting for task {}",
            records.len(),
            self.index_name,
            batch.task_id
        );

        self.wait_for_task(batch.task_id).await?;

        Ok(PublishReceipt {
            object_count: records.len(),
            task_id: Some(batch.task_id),
        })
    }
}
