//! Self-referential link construction
//!
//! Every link points back into this gateway's namespace, rebuilt per request
//! from the observed scheme, host and mount position so the output stays
//! correct behind any reverse proxy or outer mount.

use serde_json::Value;

use super::context::RequestContext;
use crate::provider::QueryOptions;

/// Build a fully-qualified gateway URL for `subpath`.
///
/// Shape: `scheme://host/<base-path>/<mount-prefix>/<subpath>/` - always
/// trailing-slash-normalized, duplicate slashes collapsed.
pub fn build_url(ctx: &RequestContext, subpath: &str) -> String {
    let path = join_segments(&[&ctx.base_path, &ctx.mount_prefix, subpath]);
    format!("{}://{}{}", ctx.scheme, ctx.host, path)
}

/// [`build_url`] with a query string appended.
pub fn build_query_url(ctx: &RequestContext, subpath: &str, params: &QueryOptions) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    format!("{}?{}", build_url(ctx, subpath), serializer.finish())
}

fn join_segments(parts: &[&str]) -> String {
    let mut path = String::from("/");
    for part in parts {
        for segment in part.split('/').filter(|s| !s.is_empty()) {
            path.push_str(segment);
            path.push('/');
        }
    }
    path
}

/// Rewrite an app-shaped record's navigation fields in place.
///
/// The store's own URL is preserved as `playstoreUrl`; `url`, `similar` and
/// `reviews` become gateway self-links keyed by the record's `appId`.
/// Records without a string `appId` are left untouched (review records and
/// suggestions never carry one).
pub fn rewrite_record_links(ctx: &RequestContext, record: &mut Value) {
    let Some(object) = record.as_object_mut() else {
        return;
    };
    let Some(app_id) = object.get("appId").and_then(Value::as_str).map(str::to_owned) else {
        return;
    };

    let encoded = urlencoding::encode(&app_id).into_owned();
    if let Some(store_url) = object.get("url").cloned() {
        object.insert("playstoreUrl".to_string(), store_url);
    }
    object.insert(
        "url".to_string(),
        Value::String(build_url(ctx, &format!("apps/{encoded}"))),
    );
    object.insert(
        "similar".to_string(),
        Value::String(build_url(ctx, &format!("apps/{encoded}/similar"))),
    );
    object.insert(
        "reviews".to_string(),
        Value::String(build_url(ctx, &format!("apps/{encoded}/reviews"))),
    );
}

/// Rewrite every record in a collection.
pub fn rewrite_collection_links(ctx: &RequestContext, records: &mut [Value]) {
    for record in records {
        rewrite_record_links(ctx, record);
    }
}
