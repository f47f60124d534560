//! HTTP API layer: router, request context, link building, pagination

pub mod context;
pub mod http;
pub mod links;
pub mod pagination;
pub mod rest;

use std::sync::Arc;

use crate::provider::CatalogProvider;

/// Shared state for all handlers.
///
/// The gateway is a stateless transformer; this holds only the provider
/// handle and the mount prefix, nothing mutable.
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    /// Normalized mount prefix: leading slash, no trailing slash (`/` when
    /// mounted at the root).
    pub mount_prefix: String,
}

impl AppState {
    pub fn new(provider: Arc<dyn CatalogProvider>, mount_prefix: &str) -> Self {
        let trimmed = mount_prefix.trim_matches('/');
        let mount_prefix = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}")
        };
        Self {
            provider,
            mount_prefix,
        }
    }
}
