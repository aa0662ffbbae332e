//! Shop listing state in the URL and the filter sidebar.

use souq_core::Availability;
use souq_core::catalog::{Catalog, PRICE_RANGES};
use souq_core::shop::{Paginated, ShopQuery, SortKey};

use super::query::{QueryParams, append_param};
use crate::i18n::Translator;

/// Grid or list layout for the product listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "list" { Self::List } else { Self::Grid }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Shop URL state: the query plus the layout toggle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShopState {
    pub query: ShopQuery,
    pub view: ViewMode,
}

impl ShopState {
    /// Read `category`, `price`, `q`, `sort`, `page` and `view`.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            query: ShopQuery {
                category: params.non_empty("category").map(str::to_owned),
                price_range: params
                    .parse::<usize>("price")
                    .filter(|index| *index < PRICE_RANGES.len()),
                search: params.non_empty("q").map(str::to_owned),
                sort: params.get("sort").map(SortKey::parse).unwrap_or_default(),
                page: params.parse("page").unwrap_or(1),
            },
            view: params.get("view").map(ViewMode::parse).unwrap_or_default(),
        }
    }

    /// `/shop` link for `query`, keeping this layout. Defaults are omitted.
    #[must_use]
    pub fn href(&self, query: &ShopQuery) -> String {
        shop_href(query, self.view)
    }

    /// Link to the same listing in another layout.
    #[must_use]
    pub fn view_href(&self, view: ViewMode) -> String {
        shop_href(&self.query, view)
    }
}

/// Build a `/shop` link. Default values are left out of the query string.
#[must_use]
pub fn shop_href(query: &ShopQuery, view: ViewMode) -> String {
    let mut url = "/shop".to_string();
    if let Some(category) = &query.category {
        url = append_param(&url, "category", category);
    }
    if let Some(index) = query.price_range {
        url = append_param(&url, "price", &index.to_string());
    }
    if let Some(search) = &query.search {
        url = append_param(&url, "q", search);
    }
    if query.sort != SortKey::Featured {
        url = append_param(&url, "sort", query.sort.as_str());
    }
    if query.page > 1 {
        url = append_param(&url, "page", &query.page.to_string());
    }
    if view != ViewMode::Grid {
        url = append_param(&url, "view", view.as_str());
    }
    url
}

/// A sidebar filter option.
#[derive(Clone, Debug)]
pub struct FilterLink {
    pub label: String,
    pub count: Option<u32>,
    pub href: String,
    pub active: bool,
}

/// A stock count line in the sidebar.
#[derive(Clone, Debug)]
pub struct StockCount {
    pub class: &'static str,
    pub label: String,
    pub count: usize,
}

/// Filter sidebar (desktop column and mobile filters drawer).
#[derive(Clone, Debug)]
pub struct ShopSidebarView {
    pub categories: Vec<FilterLink>,
    pub prices: Vec<FilterLink>,
    pub stock: Vec<StockCount>,
    /// Present when at least one filter is active.
    pub clear_href: Option<String>,
}

impl ShopSidebarView {
    #[must_use]
    pub fn new(catalog: &Catalog, state: &ShopState, t: &Translator) -> Self {
        let query = &state.query;

        let all = FilterLink {
            label: t.t("shop.all_products"),
            count: None,
            href: state.href(&query.with_category(None)),
            active: query.category.is_none(),
        };
        let categories = std::iter::once(all)
            .chain(catalog.categories().iter().map(|category| FilterLink {
                label: category.name.clone(),
                count: Some(category.count),
                href: state.href(&query.with_category(Some(&category.id))),
                active: query.category.as_deref() == Some(category.id.as_str()),
            }))
            .collect();

        let prices = PRICE_RANGES
            .iter()
            .enumerate()
            .map(|(index, range)| FilterLink {
                label: range.label(),
                count: None,
                href: state.href(&query.toggle_price_range(index)),
                active: query.price_range == Some(index),
            })
            .collect();

        let stock = [Availability::InStock, Availability::LowStock]
            .into_iter()
            .map(|availability| StockCount {
                class: availability.as_str(),
                label: t.t(availability.label_key()),
                count: catalog.availability_count(availability),
            })
            .collect();

        Self {
            categories,
            prices,
            stock,
            clear_href: (query.active_filters_count() > 0)
                .then(|| state.href(&query.cleared())),
        }
    }
}

/// A numbered pager link.
#[derive(Clone, Debug)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Shop pager. Built only when the listing spans more than one page.
#[derive(Clone, Debug)]
pub struct PagerView {
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub pages: Vec<PageLink>,
}

impl PagerView {
    #[must_use]
    pub fn new<T>(listing: &Paginated<T>, state: &ShopState) -> Option<Self> {
        if !listing.needs_pager() {
            return None;
        }
        let link = |page: usize| state.href(&state.query.with_page(page));

        Some(Self {
            prev_href: listing.has_prev().then(|| link(listing.page - 1)),
            next_href: listing.has_next().then(|| link(listing.page + 1)),
            pages: listing
                .page_numbers()
                .map(|number| PageLink {
                    number,
                    href: link(number),
                    current: number == listing.page,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::http::Uri;
    use souq_core::locale::Locale;

    use super::*;
    use crate::i18n::Translations;

    const CATALOG: &str = include_str!("../../data/catalog.json");

    fn state(uri: &'static str) -> ShopState {
        ShopState::from_params(&QueryParams::from_uri(&Uri::from_static(uri)))
    }

    #[test]
    fn test_state_from_params() {
        let s = state("/shop?category=men&price=2&q=short&sort=price-desc&page=3&view=list");
        assert_eq!(s.query.category.as_deref(), Some("men"));
        assert_eq!(s.query.price_range, Some(2));
        assert_eq!(s.query.search.as_deref(), Some("short"));
        assert_eq!(s.query.sort, SortKey::PriceDesc);
        assert_eq!(s.query.page, 3);
        assert_eq!(s.view, ViewMode::List);

        let defaults = state("/shop?price=99&sort=bogus&page=x");
        assert_eq!(defaults.query.price_range, None);
        assert_eq!(defaults.query.sort, SortKey::Featured);
        assert_eq!(defaults.query.page, 1);
    }

    #[test]
    fn test_href_round_trips_through_params() {
        let s = state("/shop?category=women&sort=rating&page=2&view=list");
        let href = s.href(&s.query);
        assert_eq!(href, "/shop?category=women&sort=rating&page=2&view=list");
        assert_eq!(shop_href(&ShopQuery::default(), ViewMode::Grid), "/shop");
    }

    #[test]
    fn test_sidebar_links() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let t = Translator::new(Arc::new(Translations::from_embedded().unwrap()), Locale::En);
        let s = state("/shop?category=men&price=1&page=2");
        let sidebar = ShopSidebarView::new(&catalog, &s, &t);

        assert_eq!(sidebar.categories.len(), 7);
        assert!(sidebar.categories[2].active, "men is selected");
        assert_eq!(sidebar.categories[0].href, "/shop?price=1");
        // Selecting the active bracket clears it
        assert_eq!(sidebar.prices[1].href, "/shop?category=men");
        assert_eq!(sidebar.clear_href.as_deref(), Some("/shop"));
        assert_eq!(sidebar.stock[0].count, 10);
        assert_eq!(sidebar.stock[1].count, 2);
    }

    #[test]
    fn test_pager_links() {
        let s = state("/shop?sort=name-asc&page=2");
        let listing = Paginated::new((0..12).collect::<Vec<_>>(), 2, 5);
        let pager = PagerView::new(&listing, &s).unwrap();

        assert_eq!(pager.prev_href.as_deref(), Some("/shop?sort=name-asc"));
        assert_eq!(pager.next_href.as_deref(), Some("/shop?sort=name-asc&page=3"));
        assert_eq!(pager.pages.len(), 3);
        assert!(pager.pages[1].current);

        let single = Paginated::new((0..4).collect::<Vec<_>>(), 1, 12);
        assert!(PagerView::new(&single, &s).is_none());
    }
}
