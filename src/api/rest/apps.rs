//! App endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::{ApiError, ResultPage};
use crate::api::context::RequestContext;
use crate::api::links::{build_query_url, build_url, rewrite_collection_links, rewrite_record_links};
use crate::api::pagination::{offset_links, page_links};
use crate::api::AppState;
use crate::provider::{merged_options, QueryOptions};

/// GET / - link directory for the gateway's two collections
pub async fn index(ctx: RequestContext) -> Json<Value> {
    Json(json!({
        "apps": build_url(&ctx, "apps"),
        "developers": build_url(&ctx, "developers"),
    }))
}

/// GET /apps - ordered dispatch on query-parameter presence:
/// `q` selects search, else `suggest` selects suggest, else list.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    ctx: RequestContext,
) -> Result<Json<ResultPage>, ApiError> {
    if let Some(term) = ctx.query.get("q").cloned() {
        search(&state, &ctx, &term).await
    } else if let Some(partial) = ctx.query.get("suggest").cloned() {
        suggest(&state, &ctx, &partial).await
    } else {
        list(&state, &ctx).await
    }
}

async fn search(
    state: &AppState,
    ctx: &RequestContext,
    term: &str,
) -> Result<Json<ResultPage>, ApiError> {
    let mut opts = ctx.query.clone();
    opts.insert("term".to_string(), term.to_string());

    let mut results = state.provider.search(&opts).await?;
    rewrite_collection_links(ctx, &mut results);
    Ok(Json(ResultPage::new(results)))
}

async fn suggest(
    state: &AppState,
    ctx: &RequestContext,
    partial: &str,
) -> Result<Json<ResultPage>, ApiError> {
    let terms = state.provider.suggest(partial).await?;

    // Suggestions are not app records; each term just links back to the
    // search route with `q` pre-filled.
    let results = terms
        .into_iter()
        .map(|term| {
            let mut params = QueryOptions::new();
            params.insert("q".to_string(), term.clone());
            json!({
                "term": term,
                "url": build_query_url(ctx, "apps", &params),
            })
        })
        .collect();
    Ok(Json(ResultPage::new(results)))
}

async fn list(state: &AppState, ctx: &RequestContext) -> Result<Json<ResultPage>, ApiError> {
    let mut results = state.provider.list(&ctx.query).await?;
    rewrite_collection_links(ctx, &mut results);
    Ok(Json(ResultPage::with_links(results, offset_links(ctx, "apps"))))
}

/// GET /apps/:app_id - single app detail, returned bare (no envelope)
pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(app_id): Path<String>,
    ctx: RequestContext,
) -> Result<Json<Value>, ApiError> {
    let opts = merged_options(&ctx.query, &[("appId", &app_id)]);
    let mut record = state.provider.app(&opts).await?;
    rewrite_record_links(&ctx, &mut record);
    Ok(Json(record))
}

/// GET /apps/:app_id/similar
pub async fn similar(
    State(state): State<Arc<AppState>>,
    Path(app_id): Path<String>,
    ctx: RequestContext,
) -> Result<Json<ResultPage>, ApiError> {
    let opts = merged_options(&ctx.query, &[("appId", &app_id)]);
    let mut results = state.provider.similar(&opts).await?;
    rewrite_collection_links(&ctx, &mut results);
    Ok(Json(ResultPage::new(results)))
}

/// GET /apps/:app_id/reviews - page-based pagination; review records carry
/// no `appId`, so they are never link-rewritten
pub async fn reviews(
    State(state): State<Arc<AppState>>,
    Path(app_id): Path<String>,
    ctx: RequestContext,
) -> Result<Json<ResultPage>, ApiError> {
    let opts = merged_options(&ctx.query, &[("appId", &app_id)]);
    let page = state.provider.reviews(&opts).await?;

    let subpath = format!("apps/{}/reviews", urlencoding::encode(&app_id));
    let links = page_links(&ctx, &subpath, page.results.len());
    Ok(Json(ResultPage::with_links(page.results, links)))
}
