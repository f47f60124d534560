//! HTTP-backed catalog provider
//!
//! Forwards each operation to a scraper service over HTTP, passing the
//! options map through as query parameters. The gateway's own correctness
//! never depends on this implementation; tests script the trait directly.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{CatalogProvider, ProviderError, ProviderResult, QueryOptions, ReviewPage};

/// Catalog provider that delegates to a remote scraper service.
pub struct UpstreamProvider {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        opts: &QueryOptions,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(opts)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx bodies carry the upstream's human-readable message.
            let message = response.text().await.unwrap_or_default();
            let message = if message.trim().is_empty() {
                format!("upstream returned {status}")
            } else {
                message
            };
            return Err(ProviderError::Upstream(message));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogProvider for UpstreamProvider {
    async fn search(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>> {
        self.fetch("search", opts).await
    }

    async fn suggest(&self, term: &str) -> ProviderResult<Vec<String>> {
        let mut opts = QueryOptions::new();
        opts.insert("term".to_string(), term.to_string());
        self.fetch("suggest", &opts).await
    }

    async fn list(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>> {
        self.fetch("list", opts).await
    }

    async fn app(&self, opts: &QueryOptions) -> ProviderResult<Value> {
        self.fetch("app", opts).await
    }

    async fn similar(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>> {
        self.fetch("similar", opts).await
    }

    async fn reviews(&self, opts: &QueryOptions) -> ProviderResult<ReviewPage> {
        self.fetch("reviews", opts).await
    }

    async fn developer(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>> {
        self.fetch("developer", opts).await
    }
}
