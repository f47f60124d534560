//! REST handlers and response envelopes
//!
//! Route surface (under the mount prefix):
//! - `GET /` - link directory
//! - `GET /apps` - search (`q`), suggest (`suggest`) or list
//! - `GET /apps/:app_id` - app detail
//! - `GET /apps/:app_id/similar` - similar apps
//! - `GET /apps/:app_id/reviews` - reviews, paginated by `page`
//! - `GET /developers/:dev_id` - apps by developer
//! - `GET /developers` - unsupported, explicit 400

pub mod apps;
pub mod developers;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::provider::ProviderError;

/// Collection envelope with optional cursor links.
#[derive(Debug, Serialize)]
pub struct ResultPage {
    pub results: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl ResultPage {
    pub fn new(results: Vec<Value>) -> Self {
        Self {
            results,
            prev: None,
            next: None,
        }
    }

    pub fn with_links(results: Vec<Value>, (prev, next): (Option<String>, Option<String>)) -> Self {
        Self {
            results,
            prev,
            next,
        }
    }
}

/// Client-facing error envelope.
///
/// Every failure is flattened to HTTP 400 with the underlying message:
/// provider errors, invalid ids and unsupported operations alike. A
/// deliberate simplification for a read-only catalog mirror.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        tracing::warn!(error = %err, "catalog provider call failed");
        Self::new(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
