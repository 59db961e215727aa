use anyhow::Result;
use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiCredentials;

const API_ENDPOINT: &str = "https://realtime.oxylabs.io/v1/queries";

/// Request body for one page-batch. Serialized verbatim as the JSON payload
/// the API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub source: String,
    pub domain: String,
    pub query: String,
    pub start_page: u32,
    pub pages: u32,
    pub parse: bool,
}

/// Seam between the collector and the network, so tests can drive the
/// collection loop with scripted batches.
#[async_trait]
pub trait FetchReviews {
    /// Returns the elements of the response's top-level `results` array.
    async fn fetch(&self, payload: &PageRequest) -> Result<Vec<Value>>;
}

pub struct ReviewApiClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: ApiCredentials,
}

impl ReviewApiClient {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self::with_endpoint(credentials, API_ENDPOINT)
    }

    pub fn with_endpoint(credentials: ApiCredentials, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            credentials,
        }
    }
}

#[async_trait]
impl FetchReviews for ReviewApiClient {
    async fn fetch(&self, payload: &PageRequest) -> Result<Vec<Value>> {
        let mut body = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        match body.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => Ok(results),
            _ => Err(anyhow!("response has no \"results\" array")),
        }
    }
}
