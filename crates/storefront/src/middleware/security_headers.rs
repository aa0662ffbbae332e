//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses. Start locked down and
//! loosen only when specific functionality requires it.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;
use crate::state::AppState;

/// Remote origin product and hero images are served from.
const IMAGE_ORIGIN: &str = "https://images.unsplash.com";

/// Origin of the embedded story video on the home page.
const VIDEO_ORIGIN: &str = "https://www.youtube-nocookie.com";

/// Build the Content-Security-Policy value.
///
/// ```text
/// default-src 'none';
/// script-src 'self' 'nonce-...';
/// style-src 'self';
/// style-src-attr 'unsafe-inline';
/// font-src 'self';
/// img-src 'self' data: https://images.unsplash.com;
/// connect-src 'self';
/// frame-src https://www.youtube-nocookie.com;
/// object-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none';
/// upgrade-insecure-requests          (HTTPS deployments only)
/// ```
///
/// `style-src-attr` allows the `style` attributes used for progress widths,
/// color swatches and banner backgrounds. Stylesheets stay same-origin.
fn content_security_policy(nonce: Option<&CspNonce>, secure: bool) -> String {
    let script_src = nonce.map_or_else(
        || "'self'".to_string(),
        |nonce| format!("'self' {}", nonce.source()),
    );

    let mut policy = format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self'; \
         style-src-attr 'unsafe-inline'; \
         font-src 'self'; \
         img-src 'self' data: {IMAGE_ORIGIN}; \
         connect-src 'self'; \
         frame-src {VIDEO_ORIGIN}; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    );
    if secure {
        policy.push_str("; upgrade-insecure-requests");
    }
    policy
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: no-referrer`
/// - `Content-Security-Policy` with the request's script nonce
/// - `Permissions-Policy` denying sensitive features
/// - `Cache-Control: no-store, max-age=0` on pages (static assets are exempt)
/// - `Cross-Origin-Opener-Policy: same-origin`
/// - `Cross-Origin-Resource-Policy: same-origin`
/// - `X-DNS-Prefetch-Control: off`
///
/// No `Cross-Origin-Embedder-Policy` is sent: `require-corp` would block the
/// remote catalog images, which carry no CORP header.
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let is_static = request.uri().path().starts_with("/static/");
    let mut response = next.run(request).await;

    let policy = content_security_policy(
        response.extensions().get::<CspNonce>(),
        state.config().is_secure(),
    );
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    if let Ok(value) = HeaderValue::from_str(&policy) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "accelerometer=(), \
             autoplay=(), \
             browsing-topics=(), \
             camera=(), \
             display-capture=(), \
             geolocation=(), \
             gyroscope=(), \
             magnetometer=(), \
             microphone=(), \
             payment=(), \
             publickey-credentials-get=(), \
             usb=(), \
             xr-spatial-tracking=()",
        ),
    );

    // Pages embed session state (cart, checkout), so they must not be cached
    if !is_static {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("x-dns-prefetch-control"),
        HeaderValue::from_static("off"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_carries_nonce_and_image_origin() {
        let nonce = CspNonce("abc123==".to_string());
        let policy = content_security_policy(Some(&nonce), false);
        assert!(policy.contains("script-src 'self' 'nonce-abc123=='"));
        assert!(policy.contains("img-src 'self' data: https://images.unsplash.com"));
        assert!(policy.contains("frame-src https://www.youtube-nocookie.com;"));
        assert!(!policy.contains("upgrade-insecure-requests"));
    }

    #[test]
    fn test_secure_policy_upgrades_requests() {
        let policy = content_security_policy(None, true);
        assert!(policy.contains("script-src 'self';"));
        assert!(policy.ends_with("upgrade-insecure-requests"));
    }
}
