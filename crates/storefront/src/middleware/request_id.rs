//! Request ID middleware for request tracing and correlation.
//!
//! An upstream proxy may supply the ID. Otherwise a UUID v4 is generated.
//! The ID is recorded on the request span, tagged on the Sentry scope and
//! echoed in the response so a visitor's report can be matched to the logs.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_UPSTREAM_ID_LEN: usize = 128;

/// Reuse a well-formed upstream ID or mint a new one.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_UPSTREAM_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(id) {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        headers
    }

    #[test]
    fn test_upstream_id_is_kept() {
        assert_eq!(resolve_request_id(&headers("cf-abc123")), "cf-abc123");
    }

    #[test]
    fn test_missing_or_malformed_id_is_replaced() {
        let minted = resolve_request_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&minted).is_ok());

        let too_long = "x".repeat(MAX_UPSTREAM_ID_LEN + 1);
        assert_ne!(resolve_request_id(&headers(&too_long)), too_long);
        assert_ne!(resolve_request_id(&headers("has space")), "has space");
    }
}
