//! HTTP client for a Sanity content lake dataset.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

use super::{OrderQuery, OrderStore, Patch, StoreError};
use crate::{config::SanityConfig, models::Order};

pub struct SanityClient {
    base_url: String,
    dataset: String,
    /// Bearer token for mutations and private datasets. Never logged.
    token: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()?;

        let base_url = match &config.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", config.project_id),
        };

        Ok(Self {
            base_url: format!("{}/v{}", base_url, config.api_version),
            dataset: config.dataset.clone(),
            token: config.token.clone(),
            client,
        })
    }

    fn query_url(&self) -> String {
        format!("{}/data/query/{}", self.base_url, self.dataset)
    }

    fn mutate_url(&self) -> String {
        format!("{}/data/mutate/{}", self.base_url, self.dataset)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn mutate(&self, mutations: serde_json::Value) -> Result<(), StoreError> {
        let request = self
            .client
            .post(self.mutate_url())
            .json(&json!({ "mutations": mutations }));
        let response = self.authorize(request).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Server {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl OrderStore for SanityClient {
    fn backend(&self) -> &'static str {
        "sanity"
    }

    async fn query(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError> {
        let groq = query.to_groq();
        let request = self
            .client
            .get(self.query_url())
            .query(&[("query", groq.as_str())]);
        let response = check_status(self.authorize(request).send().await?).await?;

        let bytes = response.bytes().await?;
        let parsed: QueryResponse<Vec<Order>> = serde_json::from_slice(&bytes)?;
        tracing::debug!(count = parsed.result.len(), "order query returned");
        Ok(parsed.result)
    }

    async fn commit_patch(&self, patch: Patch) -> Result<(), StoreError> {
        self.mutate(json!([{ "patch": { "id": patch.id, "set": patch.set } }]))
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.mutate(json!([{ "delete": { "id": id } }])).await
    }
}
