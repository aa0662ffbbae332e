//! Layout context shared by every page.
//!
//! [`Page`] is an extractor. It resolves the visitor's locale, loads the
//! session cart for the header badge and builds the open drawer, if any.
//! Page templates hold it as `page` and `base.html` reads it.

use axum::extract::FromRequestParts;
use axum::http::{header::ACCEPT_LANGUAGE, request::Parts};
use souq_core::locale::{Locale, pagination_labels};
use tower_sessions::Session;

use super::drawer::{DrawerContext, DrawerKind, DrawerView};
use super::query::{DRAWER_PARAMS, QueryParams, append_param, with_query};
use crate::content::MENU;
use crate::error::AppError;
use crate::i18n::Translator;
use crate::middleware::CspNonce;
use crate::models::session;
use crate::state::AppState;

/// A header menu link.
#[derive(Clone, Debug)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

/// A header menu category with its subcategories.
#[derive(Clone, Debug)]
pub struct MenuCategoryView {
    pub label: String,
    pub items: Vec<MenuLink>,
}

/// Per-request layout context.
#[derive(Clone, Debug)]
pub struct Page {
    translator: Translator,
    pub lang: &'static str,
    pub dir: &'static str,
    /// Locale the language toggle switches to.
    pub toggle_locale: &'static str,
    pub toggle_label: &'static str,
    pub nonce: String,
    /// Current path and query without drawer parameters.
    pub current: String,
    /// Current path only, for GET forms that rebuild the query.
    pub path: String,
    pub cart_count: u32,
    pub menu: Vec<MenuCategoryView>,
    pub drawer: Option<DrawerView>,
    pub prev_label: String,
    pub next_label: String,
}

impl Page {
    /// Translate a key for the visitor's locale.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.translator.locale()
    }

    /// Link that opens a drawer over the current page.
    #[must_use]
    pub fn drawer_href(&self, kind: &str) -> String {
        append_param(&self.current, "drawer", kind)
    }

    /// `scroll-lock` while a drawer is open.
    #[must_use]
    pub const fn body_class(&self) -> &'static str {
        if self.drawer.is_some() { "scroll-lock" } else { "" }
    }
}

/// Pick the locale: session choice, then `?lang=`, then `Accept-Language`,
/// then the configured default.
///
/// A stored choice wins over `?lang=`, so a shared link cannot flip the
/// language of a visitor who picked one with the toggle. `?lang=` only
/// applies to sessions with no choice yet.
#[must_use]
pub fn resolve_locale(
    stored: Option<Locale>,
    query: Option<&str>,
    accept_language: Option<&str>,
    default: Locale,
) -> Locale {
    stored
        .or_else(|| query.and_then(Locale::parse))
        .or_else(|| accept_language.and_then(Locale::from_accept_language))
        .unwrap_or(default)
}

fn menu(state: &AppState, t: &Translator) -> Vec<MenuCategoryView> {
    MENU.iter()
        .map(|(category, subcategories)| MenuCategoryView {
            label: t.t(&format!("header.categories.{category}")),
            items: subcategories
                .iter()
                .map(|sub| MenuLink {
                    label: t.t(&format!("header.subcategories.{sub}")),
                    href: state
                        .catalog()
                        .category_by_id(sub)
                        .map_or_else(|| "/shop".to_string(), |c| {
                            append_param("/shop", "category", &c.id)
                        }),
                })
                .collect(),
        })
        .collect()
}

impl FromRequestParts<AppState> for Page {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;
        let nonce = parts
            .extensions
            .get::<CspNonce>()
            .map(|n| n.value().to_string())
            .unwrap_or_default();
        let params = QueryParams::from_uri(&parts.uri);

        let locale = resolve_locale(
            session::stored_locale(&session).await,
            params.get("lang"),
            parts
                .headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok()),
            state.config().default_locale,
        );
        let translator = Translator::new(state.translations(), locale);
        let direction = locale.direction();

        let cart = session::load_cart(&session).await?;
        let path = parts.uri.path().to_string();
        let current = with_query(&path, &params.encode_without(DRAWER_PARAMS));

        let drawer = params.get("drawer").and_then(DrawerKind::parse).map(|kind| {
            DrawerView::build(
                kind,
                &DrawerContext {
                    catalog: state.catalog(),
                    translator: &translator,
                    cart: &cart,
                    params: &params,
                    direction,
                    close_href: &current,
                },
            )
        });

        let (prev_key, next_key) = pagination_labels(direction);
        let toggle = locale.other();

        Ok(Self {
            lang: locale.code(),
            dir: direction.as_str(),
            toggle_locale: toggle.code(),
            toggle_label: toggle.native_name(),
            nonce,
            current,
            path,
            cart_count: cart.item_count(),
            menu: menu(state, &translator),
            drawer,
            prev_label: translator.t(prev_key),
            next_label: translator.t(next_key),
            translator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_resolution_order() {
        // The toggle's stored choice beats both ?lang= and the header
        assert_eq!(
            resolve_locale(Some(Locale::En), Some("ar"), Some("ar"), Locale::Ar),
            Locale::En
        );
        assert_eq!(
            resolve_locale(None, Some("en"), Some("ar"), Locale::Ar),
            Locale::En
        );
        assert_eq!(
            resolve_locale(None, Some("de"), Some("en-US,en;q=0.9"), Locale::Ar),
            Locale::En
        );
        assert_eq!(resolve_locale(None, None, Some("fr"), Locale::Ar), Locale::Ar);
        assert_eq!(resolve_locale(None, None, None, Locale::En), Locale::En);
    }
}
