//! Per-request context
//!
//! Immutable bundle of everything the link builder and pagination need:
//! forwarded-aware scheme and host, the path segment preceding the gateway's
//! mount prefix, and the raw query parameters. Extracted once per request,
//! read-only afterwards.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::header;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::AppState;

#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request scheme, honoring `X-Forwarded-Proto` from a reverse proxy.
    pub scheme: String,
    /// Request host, honoring `X-Forwarded-Host`.
    pub host: String,
    /// Path segment preceding the mount prefix in the original URL. Empty
    /// when the gateway is reached directly; carries the outer prefix when
    /// the router is composed into a larger application.
    pub base_path: String,
    /// The gateway's own mount prefix (normalized, see [`AppState`]).
    pub mount_prefix: String,
    /// Raw query parameters. Ordering is irrelevant to the provider; the
    /// sorted map keeps rebuilt cursor links deterministic.
    pub query: BTreeMap<String, String>,
}

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // OriginalUri survives router nesting; the plain request URI has the
        // nest prefix already stripped.
        let original_path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Ok(Self {
            scheme: forwarded_scheme(&parts.headers),
            host: forwarded_host(parts),
            base_path: base_path_of(&original_path, &state.mount_prefix),
            mount_prefix: state.mount_prefix.clone(),
            query: parse_query(parts.uri.query().unwrap_or("")),
        })
    }
}

fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn forwarded_scheme(headers: &HeaderMap) -> String {
    first_header_value(headers, "x-forwarded-proto").unwrap_or_else(|| "http".to_string())
}

fn forwarded_host(parts: &Parts) -> String {
    first_header_value(&parts.headers, "x-forwarded-host")
        .or_else(|| first_header_value(&parts.headers, header::HOST.as_str()))
        .or_else(|| parts.uri.authority().map(|a| a.to_string()))
        .unwrap_or_else(|| "localhost".to_string())
}

/// Everything before the first occurrence of the mount prefix in the
/// original path; empty when the prefix leads the path (or is the root).
fn base_path_of(original_path: &str, mount_prefix: &str) -> String {
    if mount_prefix == "/" {
        return String::new();
    }
    original_path
        .find(mount_prefix)
        .map(|idx| original_path[..idx].to_string())
        .unwrap_or_default()
}

fn parse_query(raw: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
