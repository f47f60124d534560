//! Developer endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::{ApiError, ResultPage};
use crate::api::context::RequestContext;
use crate::api::links::{build_url, rewrite_collection_links};
use crate::api::AppState;
use crate::provider::merged_options;

/// GET /developers/:dev_id - apps published by one developer
pub async fn developer_apps(
    State(state): State<Arc<AppState>>,
    Path(dev_id): Path<String>,
    ctx: RequestContext,
) -> Result<Json<ResultPage>, ApiError> {
    let opts = merged_options(&ctx.query, &[("devId", &dev_id)]);
    let mut results = state.provider.developer(&opts).await?;
    rewrite_collection_links(&ctx, &mut results);
    Ok(Json(ResultPage::new(results)))
}

/// GET /developers - intentionally unsupported: the store has no "list all
/// developers" operation, so the response points at the supported shape
pub async fn unsupported(ctx: RequestContext) -> impl IntoResponse {
    let example = build_url(
        &ctx,
        &format!("developers/{}", urlencoding::encode("DxCo Games")),
    );
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "message": "Please specify a developer id.",
            "example": example,
        })),
    )
}
