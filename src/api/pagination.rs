//! Stateless cursor links
//!
//! Both strategies encode the whole cursor into the `prev`/`next` URLs;
//! nothing is held server-side. Cursor parameters are parsed defensively:
//! non-numeric input falls back to the default, never to an error.

use super::context::RequestContext;
use super::links::build_query_url;

/// The provider rejects offsets past this depth.
pub const OFFSET_CEILING: i64 = 500;

/// Default window size for offset-based listing.
pub const DEFAULT_NUM: i64 = 60;

fn cursor_value(ctx: &RequestContext, key: &str, default: i64) -> i64 {
    ctx.query
        .get(key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn cursor_url(ctx: &RequestContext, subpath: &str, key: &str, value: i64) -> String {
    let mut params = ctx.query.clone();
    params.insert(key.to_string(), value.to_string());
    build_query_url(ctx, subpath, &params)
}

/// Offset-based cursor links (`start`/`num`) for the list operation.
///
/// `prev` exists iff the previous window starts at or after zero; `next`
/// exists iff the next window ends within [`OFFSET_CEILING`]. Every other
/// query parameter is carried over unchanged.
pub fn offset_links(ctx: &RequestContext, subpath: &str) -> (Option<String>, Option<String>) {
    let num = cursor_value(ctx, "num", DEFAULT_NUM);
    let start = cursor_value(ctx, "start", 0);

    // Checked arithmetic: a cursor that overflows i64 has no link.
    let prev = start
        .checked_sub(num)
        .filter(|&prev_start| prev_start >= 0)
        .map(|prev_start| cursor_url(ctx, subpath, "start", prev_start));
    let next = start
        .checked_add(num)
        .filter(|&next_start| next_start <= OFFSET_CEILING)
        .map(|next_start| cursor_url(ctx, subpath, "start", next_start));
    (prev, next)
}

/// Page-based cursor links (`page`) for the reviews operation.
///
/// `prev` exists iff there is a page before this one. There is no depth
/// ceiling: `next` exists iff the current page is non-empty, so clients
/// probe until an empty page signals the end.
pub fn page_links(
    ctx: &RequestContext,
    subpath: &str,
    results_len: usize,
) -> (Option<String>, Option<String>) {
    let page = cursor_value(ctx, "page", 0);

    // `page > 0` makes the decrement safe; the increment is checked.
    let prev = (page > 0).then(|| cursor_url(ctx, subpath, "page", page - 1));
    let next = (results_len > 0)
        .then(|| page.checked_add(1))
        .flatten()
        .map(|next_page| cursor_url(ctx, subpath, "page", next_page));
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn ctx(pairs: &[(&str, &str)]) -> RequestContext {
        let query: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RequestContext {
            scheme: "http".to_string(),
            host: "gw.test".to_string(),
            base_path: String::new(),
            mount_prefix: "/api".to_string(),
            query,
        }
    }

    #[test]
    fn test_offset_first_window_has_no_prev() {
        let (prev, next) = offset_links(&ctx(&[]), "apps");
        assert!(prev.is_none());
        assert_eq!(next.as_deref(), Some("http://gw.test/api/apps/?start=60"));
    }

    #[test]
    fn test_offset_second_window_prev_rewinds_to_zero() {
        let (prev, next) = offset_links(&ctx(&[("start", "60"), ("num", "60")]), "apps");
        assert_eq!(
            prev.as_deref(),
            Some("http://gw.test/api/apps/?num=60&start=0")
        );
        assert_eq!(
            next.as_deref(),
            Some("http://gw.test/api/apps/?num=60&start=120")
        );
    }

    #[test]
    fn test_offset_next_present_at_ceiling_boundary() {
        let (_, next) = offset_links(&ctx(&[("start", "440"), ("num", "60")]), "apps");
        assert_eq!(
            next.as_deref(),
            Some("http://gw.test/api/apps/?num=60&start=500")
        );
    }

    #[test]
    fn test_offset_next_absent_past_ceiling() {
        let (prev, next) = offset_links(&ctx(&[("start", "480"), ("num", "60")]), "apps");
        assert!(prev.is_some());
        assert!(next.is_none());
    }

    #[test]
    fn test_offset_preserves_other_params() {
        let (_, next) = offset_links(
            &ctx(&[("start", "0"), ("num", "60"), ("category", "GAME"), ("lang", "en")]),
            "apps",
        );
        assert_eq!(
            next.as_deref(),
            Some("http://gw.test/api/apps/?category=GAME&lang=en&num=60&start=60")
        );
    }

    #[test]
    fn test_offset_non_numeric_cursor_defaults() {
        let (prev, next) = offset_links(&ctx(&[("start", "abc"), ("num", "xyz")]), "apps");
        // Falls back to start=0, num=60.
        assert!(prev.is_none());
        assert_eq!(
            next.as_deref(),
            Some("http://gw.test/api/apps/?num=xyz&start=60")
        );
    }

    #[test]
    fn test_offset_overflowing_cursor_has_no_links() {
        let (prev, next) = offset_links(
            &ctx(&[("start", "9223372036854775807"), ("num", "-1")]),
            "apps",
        );
        assert!(prev.is_none());
        assert!(next.is_none());
    }

    #[test]
    fn test_offset_underflowing_prev_is_absent() {
        let (prev, _) = offset_links(
            &ctx(&[("start", "-9223372036854775808"), ("num", "60")]),
            "apps",
        );
        assert!(prev.is_none());
    }

    #[test]
    fn test_page_zero_has_no_prev() {
        let (prev, next) = page_links(&ctx(&[]), "apps/com.foo/reviews", 3);
        assert!(prev.is_none());
        assert_eq!(
            next.as_deref(),
            Some("http://gw.test/api/apps/com.foo/reviews/?page=1")
        );
    }

    #[test]
    fn test_page_empty_results_ends_forward_chain() {
        let (prev, next) = page_links(&ctx(&[("page", "3")]), "apps/com.foo/reviews", 0);
        assert_eq!(
            prev.as_deref(),
            Some("http://gw.test/api/apps/com.foo/reviews/?page=2")
        );
        assert!(next.is_none());
    }

    #[test]
    fn test_page_overflowing_cursor_has_no_next() {
        let (prev, next) = page_links(
            &ctx(&[("page", "9223372036854775807")]),
            "apps/com.foo/reviews",
            2,
        );
        assert!(next.is_none());
        assert_eq!(
            prev.as_deref(),
            Some("http://gw.test/api/apps/com.foo/reviews/?page=9223372036854775806")
        );
    }

    #[test]
    fn test_page_non_numeric_defaults_to_zero() {
        let (prev, _) = page_links(&ctx(&[("page", "first")]), "apps/com.foo/reviews", 1);
        assert!(prev.is_none());
    }
}
