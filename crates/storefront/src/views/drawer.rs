//! Side drawers: cart, search, account, mobile menu and shop filters.
//!
//! A drawer is open when the URL carries `?drawer=<kind>`. The layout renders
//! it with a backdrop and close link pointing at the same URL without the
//! drawer parameters, and locks page scrolling while it is open.

use souq_core::cart::Cart;
use souq_core::catalog::Catalog;
use souq_core::locale::{Direction, DrawerSide};

use super::cart::CartView;
use super::product::ProductCardView;
use super::query::{QueryParams, append_param};
use super::shop::{ShopSidebarView, ShopState};
use crate::i18n::Translator;

/// Which drawer is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKind {
    Cart,
    Search,
    Account,
    Menu,
    Filters,
}

impl DrawerKind {
    pub const ALL: [Self; 5] = [
        Self::Cart,
        Self::Search,
        Self::Account,
        Self::Menu,
        Self::Filters,
    ];

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Search => "search",
            Self::Account => "account",
            Self::Menu => "menu",
            Self::Filters => "filters",
        }
    }

    /// Navigation drawers open from the reading start; the rest from the end.
    #[must_use]
    pub const fn side(self) -> DrawerSide {
        match self {
            Self::Menu | Self::Filters => DrawerSide::Start,
            Self::Cart | Self::Search | Self::Account => DrawerSide::End,
        }
    }

    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Cart => "general.cart.title",
            Self::Search => "general.search.title",
            Self::Account => "general.account.title",
            Self::Menu => "common.menu",
            Self::Filters => "shop.filters",
        }
    }
}

/// Search drawer contents.
#[derive(Clone, Debug)]
pub struct SearchDrawerView {
    pub query: String,
    /// "Results" for a query, "Suggested products" without one.
    pub heading: String,
    pub results: Vec<ProductCardView>,
    pub no_results: Option<String>,
    /// Full shop listing for the query.
    pub view_all_href: Option<String>,
}

impl SearchDrawerView {
    #[must_use]
    pub fn new(catalog: &Catalog, query: &str, t: &Translator) -> Self {
        let query = query.trim();
        let results = ProductCardView::list(catalog.search(query), t);
        let searching = !query.is_empty();

        Self {
            query: query.to_string(),
            heading: t.t(if searching {
                "general.search.results"
            } else {
                "general.search.suggested"
            }),
            no_results: (searching && results.is_empty())
                .then(|| t.t_with("general.search.no_results", &[("query", query)])),
            view_all_href: searching.then(|| append_param("/shop", "q", query)),
            results,
        }
    }
}

/// Account drawer tabs. The forms are presentational.
#[derive(Clone, Debug)]
pub struct AccountDrawerView {
    pub register: bool,
    pub login_href: String,
    pub register_href: String,
}

/// An open drawer ready to render.
#[derive(Clone, Debug)]
pub struct DrawerView {
    pub kind: &'static str,
    pub title: String,
    /// Physical edge ("left" or "right") after resolving against direction.
    pub side: &'static str,
    /// Slide-in start offset for that edge.
    pub offscreen: &'static str,
    /// Same page without the drawer parameters.
    pub close_href: String,
    pub cart: Option<CartView>,
    pub search: Option<SearchDrawerView>,
    pub account: Option<AccountDrawerView>,
    pub menu: bool,
    pub filters: Option<ShopSidebarView>,
}

/// Inputs shared by every drawer body.
pub struct DrawerContext<'a> {
    pub catalog: &'a Catalog,
    pub translator: &'a Translator,
    pub cart: &'a Cart,
    pub params: &'a QueryParams,
    pub direction: Direction,
    pub close_href: &'a str,
}

impl DrawerView {
    #[must_use]
    pub fn build(kind: DrawerKind, ctx: &DrawerContext<'_>) -> Self {
        let t = ctx.translator;
        let side = kind.side().physical(ctx.direction);
        let mut view = Self {
            kind: kind.as_str(),
            title: t.t(kind.title_key()),
            side: side.as_str(),
            offscreen: side.offscreen_translate(),
            close_href: ctx.close_href.to_string(),
            cart: None,
            search: None,
            account: None,
            menu: false,
            filters: None,
        };

        match kind {
            DrawerKind::Cart => {
                view.cart = Some(CartView::new(ctx.cart, ctx.catalog, t));
            }
            DrawerKind::Search => {
                let query = ctx.params.get("q").unwrap_or_default();
                view.search = Some(SearchDrawerView::new(ctx.catalog, query, t));
            }
            DrawerKind::Account => {
                let base = append_param(ctx.close_href, "drawer", "account");
                view.account = Some(AccountDrawerView {
                    register: ctx.params.get("account") == Some("register"),
                    login_href: base.clone(),
                    register_href: append_param(&base, "account", "register"),
                });
            }
            DrawerKind::Menu => view.menu = true,
            DrawerKind::Filters => {
                let state = ShopState::from_params(ctx.params);
                view.filters = Some(ShopSidebarView::new(ctx.catalog, &state, t));
            }
        }

        view
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::http::Uri;
    use souq_core::locale::Locale;

    use super::*;
    use crate::i18n::Translations;

    const CATALOG: &str = include_str!("../../data/catalog.json");

    fn en() -> Translator {
        Translator::new(Arc::new(Translations::from_embedded().unwrap()), Locale::En)
    }

    #[test]
    fn test_kinds_parse() {
        for kind in DrawerKind::ALL {
            assert_eq!(DrawerKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(DrawerKind::parse("wishlist"), None);
    }

    #[test]
    fn test_side_mirrors_in_rtl() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let t = en();
        let cart = Cart::sample();
        let params = QueryParams::default();
        let ctx = |direction| DrawerContext {
            catalog: &catalog,
            translator: &t,
            cart: &cart,
            params: &params,
            direction,
            close_href: "/",
        };

        let ltr = DrawerView::build(DrawerKind::Cart, &ctx(Direction::Ltr));
        assert_eq!((ltr.side, ltr.offscreen), ("right", "100%"));
        let rtl = DrawerView::build(DrawerKind::Cart, &ctx(Direction::Rtl));
        assert_eq!((rtl.side, rtl.offscreen), ("left", "-100%"));
        assert_eq!(DrawerView::build(DrawerKind::Menu, &ctx(Direction::Ltr)).side, "left");
        assert_eq!(DrawerView::build(DrawerKind::Menu, &ctx(Direction::Rtl)).side, "right");
    }

    #[test]
    fn test_search_drawer_states() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let t = en();

        let suggested = SearchDrawerView::new(&catalog, "  ", &t);
        assert_eq!(suggested.heading, "Suggested products");
        assert_eq!(suggested.results.len(), 3);
        assert!(suggested.view_all_href.is_none());

        let found = SearchDrawerView::new(&catalog, "jacket", &t);
        assert_eq!(found.heading, "Results");
        assert_eq!(found.results.len(), 2);
        assert_eq!(found.view_all_href.as_deref(), Some("/shop?q=jacket"));

        let none = SearchDrawerView::new(&catalog, "zzz", &t);
        assert_eq!(
            none.no_results.as_deref(),
            Some("No results found for \"zzz\"")
        );
    }

    #[test]
    fn test_account_tabs() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let t = en();
        let cart = Cart::sample();
        let params = QueryParams::from_uri(&Uri::from_static("/?drawer=account&account=register"));
        let view = DrawerView::build(
            DrawerKind::Account,
            &DrawerContext {
                catalog: &catalog,
                translator: &t,
                cart: &cart,
                params: &params,
                direction: Direction::Ltr,
                close_href: "/shop",
            },
        );

        let account = view.account.unwrap();
        assert!(account.register);
        assert_eq!(account.login_href, "/shop?drawer=account");
        assert_eq!(account.register_href, "/shop?drawer=account&account=register");
        assert_eq!(view.close_href, "/shop");
    }
}
