//! Integration tests for the Souq storefront.
//!
//! Each test boots the full router on an ephemeral port and drives it over
//! HTTP with a cookie-keeping client, so session state (cart, locale,
//! checkout progress) flows between requests the way it does in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p souq-integration-tests
//! ```

use std::collections::HashMap;

use souq_storefront::config::StorefrontConfig;
use souq_storefront::state::AppState;

/// A running storefront and a client bound to one visitor session.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront with English as the default locale.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot start.
    pub async fn new() -> Self {
        Self::with_vars(&[("STOREFRONT_DEFAULT_LOCALE", "en")]).await
    }

    /// Start a storefront configured from `vars` instead of the environment.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or the server cannot start.
    #[allow(clippy::unwrap_used)]
    pub async fn with_vars(vars: &[(&str, &str)]) -> Self {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let config = StorefrontConfig::from_vars(|key| vars.get(key).cloned()).unwrap();
        let app = souq_storefront::app(AppState::new(config).unwrap());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a page and return its status and body.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    #[allow(clippy::unwrap_used)]
    pub async fn get(&self, path: &str) -> (u16, String) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.text().await.unwrap())
    }

    /// POST a form, following the redirect, and return the final status and body.
    ///
    /// # Panics
    ///
    /// Panics on transport errors.
    #[allow(clippy::unwrap_used)]
    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> (u16, String) {
        let resp = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.text().await.unwrap())
    }

    /// Current header cart badge.
    ///
    /// # Panics
    ///
    /// Panics if the badge fragment is malformed.
    #[allow(clippy::unwrap_used)]
    pub async fn cart_count(&self) -> u32 {
        let (_, body) = self.get("/cart/count").await;
        attribute(&body, "data-count").unwrap().parse().unwrap()
    }
}

/// Product slugs linked from `html`, in order of first appearance.
#[must_use]
pub fn product_slugs(html: &str) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();
    for chunk in html.split("href=\"/product/").skip(1) {
        let slug = chunk.split(['"', '?']).next().unwrap_or_default().to_string();
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }
    slugs
}

/// Value of the first `name` attribute in `html`.
#[must_use]
pub fn attribute<'a>(html: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{name}=\"");
    let start = html.find(&marker)? + marker.len();
    let rest = html.get(start..)?;
    rest.split('"').next()
}
