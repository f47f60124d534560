//! Playstore API Gateway
//!
//! A stateless HTTP gateway that re-exposes the Google Play catalog as a
//! self-describing JSON REST API: URL design, request-to-query translation,
//! response normalization and cursor pagination. Data retrieval itself is
//! delegated to a [`CatalogProvider`].
//!
//! # Modules
//!
//! - `api`: router, request context, link builder, pagination, handlers
//! - `provider`: the catalog provider trait and its HTTP-backed implementation
//! - `config`: environment-driven process configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use playstore_api::{create_app, AppState, UpstreamProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(UpstreamProvider::new("http://localhost:3025"));
//! let state = Arc::new(AppState::new(provider, "/api"));
//! let app = create_app(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod provider;

// Re-export commonly used items at crate root
pub use api::http::{create_app, create_router};
pub use api::AppState;
pub use config::{Config, ConfigError};
pub use provider::{
    CatalogProvider, ProviderError, ProviderResult, QueryOptions, ReviewPage, UpstreamProvider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
