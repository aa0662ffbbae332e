//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the URL of the fingerprinted copy of a static asset.
///
/// The hash is computed at build time. When hashing was skipped the plain
/// path is returned.
///
/// Usage in templates: `{{ "css"|asset_url }}` or `{{ "js"|asset_url }}`
#[askama::filter_fn]
pub fn asset_url(kind: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let kind = kind.to_string();
    let (file, hash) = match kind.as_str() {
        "js" => ("app.js", env!("JS_HASH")),
        _ => ("main.css", env!("CSS_HASH")),
    };
    Ok(hashed_path(&kind, file, hash))
}

fn hashed_path(kind: &str, file: &str, hash: &str) -> String {
    if hash.is_empty() {
        return format!("/static/{kind}/{file}");
    }
    let (stem, ext) = file.rsplit_once('.').unwrap_or((file, ""));
    format!("/static/{kind}/derived/{stem}.{hash}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_path() {
        assert_eq!(
            hashed_path("css", "main.css", "ab12cd34"),
            "/static/css/derived/main.ab12cd34.css"
        );
        assert_eq!(hashed_path("js", "app.js", ""), "/static/js/app.js");
    }
}
