//! Catalog provider boundary
//!
//! The gateway never scrapes the store itself; every operation is delegated
//! to a [`CatalogProvider`]. Records come back as opaque JSON values so the
//! gateway stays agnostic to the provider's field set - it only touches the
//! navigation fields it rewrites (`appId`, `url`).

mod upstream;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use upstream::UpstreamProvider;

/// Options passed opaquely to the catalog provider.
///
/// Built by merging raw query parameters with path parameters; a BTreeMap
/// keeps link output deterministic when the options are echoed back into
/// cursor URLs.
pub type QueryOptions = BTreeMap<String, String>;

/// Merge raw query parameters with path parameters.
///
/// Path parameters are inserted last, so on a key collision the path
/// parameter always wins over a same-named query parameter.
pub fn merged_options(query: &QueryOptions, path_params: &[(&str, &str)]) -> QueryOptions {
    let mut opts = query.clone();
    for (key, value) in path_params {
        opts.insert((*key).to_string(), (*value).to_string());
    }
    opts
}

/// Pre-paginated review page as returned by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewPage {
    pub results: Vec<Value>,
}

/// Failure reported by the catalog provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Error surfaced by the catalog service; the message is forwarded to
    /// the client verbatim.
    #[error("{0}")]
    Upstream(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// The catalog operations this gateway re-exposes.
///
/// Scalar operations (`app`) return one record; collection operations return
/// the full result set for the requested window - pagination windows are cut
/// by the provider through the options map, never by slicing here.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full-text search; `opts` carries `term` plus the raw query parameters.
    async fn search(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>>;

    /// Search-term completion for a partial query.
    async fn suggest(&self, term: &str) -> ProviderResult<Vec<String>>;

    /// Collection listing, windowed by `start`/`num` in `opts`.
    async fn list(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>>;

    /// Detail record for the app named by `appId` in `opts`.
    async fn app(&self, opts: &QueryOptions) -> ProviderResult<Value>;

    /// Apps similar to the one named by `appId` in `opts`.
    async fn similar(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>>;

    /// One page of reviews for the app named by `appId`, selected by `page`.
    async fn reviews(&self, opts: &QueryOptions) -> ProviderResult<ReviewPage>;

    /// Apps published by the developer named by `devId` in `opts`.
    async fn developer(&self, opts: &QueryOptions) -> ProviderResult<Vec<Value>>;
}
