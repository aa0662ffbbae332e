//! URL query state.
//!
//! Pages keep their UI state in the query string (`?drawer=cart`,
//! `?image=2`, `?page=3`). These helpers read it and build links that change
//! one piece of it.

use axum::extract::Query;
use axum::http::Uri;

/// Parameters that only control a drawer and are dropped when it closes.
pub const DRAWER_PARAMS: &[&str] = &["drawer", "account"];

/// Decoded query parameters in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Decode the query of a request URI. A malformed query is treated as empty.
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| Self(pairs))
            .unwrap_or_default()
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, ignoring blanks.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Parse the value for `key`.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.non_empty(key).and_then(|v| v.parse().ok())
    }

    /// Encoded query string without the given keys (no leading `?`).
    #[must_use]
    pub fn encode_without(&self, drop: &[&str]) -> String {
        self.0
            .iter()
            .filter(|(k, _)| !drop.contains(&k.as_str()))
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// `path` with `query` appended when it is non-empty.
#[must_use]
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Append one encoded parameter to a URL that may already carry a query.
#[must_use]
pub fn append_param(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{url}{separator}{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}

/// Whether a redirect target is a path on this site.
///
/// Rejects absolute URLs and protocol-relative `//host` targets.
#[must_use]
pub fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\")
}

/// `target` when it is a local path, otherwise `fallback`.
#[must_use]
pub fn safe_return_to<'a>(target: Option<&'a str>, fallback: &'a str) -> &'a str {
    target.filter(|t| is_local_path(t)).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(uri: &'static str) -> QueryParams {
        QueryParams::from_uri(&Uri::from_static(uri))
    }

    #[test]
    fn test_reads_and_drops_params() {
        let q = params("/shop?category=men&drawer=filters&q=classic+tee&page=2");
        assert_eq!(q.get("category"), Some("men"));
        assert_eq!(q.get("q"), Some("classic tee"));
        assert_eq!(q.parse::<usize>("page"), Some(2));
        assert_eq!(q.parse::<usize>("missing"), None);
        assert_eq!(
            q.encode_without(DRAWER_PARAMS),
            "category=men&q=classic%20tee&page=2"
        );
    }

    #[test]
    fn test_link_building() {
        assert_eq!(with_query("/cart", ""), "/cart");
        assert_eq!(append_param("/", "drawer", "cart"), "/?drawer=cart");
        assert_eq!(
            append_param("/shop?page=2", "drawer", "filters"),
            "/shop?page=2&drawer=filters"
        );
    }

    #[test]
    fn test_return_targets_stay_on_site() {
        assert_eq!(safe_return_to(Some("/shop?page=2"), "/cart"), "/shop?page=2");
        assert_eq!(safe_return_to(Some("//evil.example"), "/cart"), "/cart");
        assert_eq!(safe_return_to(Some("https://evil.example"), "/cart"), "/cart");
        assert_eq!(safe_return_to(None, "/cart"), "/cart");
    }
}
