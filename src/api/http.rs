//! HTTP router setup with Axum

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;

use super::rest::{apps, developers};
use super::AppState;

/// Create the Axum router with all endpoints nested under the mount prefix.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Public read-only catalog mirror: allow every origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", get(apps::index))
        .route("/apps", get(apps::dispatch))
        .route("/apps/:app_id", get(apps::detail))
        .route("/apps/:app_id/similar", get(apps::similar))
        .route("/apps/:app_id/reviews", get(apps::reviews))
        .route("/developers", get(developers::unsupported))
        .route("/developers/:dev_id", get(developers::developer_apps));

    // Nesting at "/" is not a valid axum route; a root mount uses the
    // routes directly.
    let router = if state.mount_prefix == "/" {
        routes
    } else {
        Router::new().nest(&state.mount_prefix, routes)
    };

    router.layer(cors).with_state(state)
}

/// [`create_router`] wrapped so `/apps/` and `/apps` hit the same route.
///
/// The wrapper must enclose the router (not be layered onto it) so the
/// trailing slash is trimmed before route matching runs.
pub fn create_app(state: Arc<AppState>) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(create_router(state))
}
