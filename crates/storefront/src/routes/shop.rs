//! Shop listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::Uri;
use souq_core::shop::{Paginated, SortKey};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::shop::PagerView;
use crate::views::{DrawerKind, Page, ProductCardView, QueryParams, ShopSidebarView, ShopState, ViewMode};

/// An option in the sort dropdown.
pub struct SortOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// A hidden input carried by the sort form so filters survive a re-sort.
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

/// An active filter chip.
pub struct FilterChip {
    pub label: String,
    pub remove_href: String,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/shop.html")]
pub struct ShopTemplate {
    pub page: Page,
    /// Active category name or "All products".
    pub heading: String,
    pub sidebar: ShopSidebarView,
    pub count_label: String,
    pub sort_options: Vec<SortOption>,
    pub hidden_fields: Vec<HiddenField>,
    pub list_view: bool,
    pub grid_href: String,
    pub list_href: String,
    pub chips: Vec<FilterChip>,
    pub products: Vec<ProductCardView>,
    pub pager: Option<PagerView>,
    pub filters_href: String,
}

fn hidden_fields(state: &ShopState) -> Vec<HiddenField> {
    let query = &state.query;
    let mut fields = Vec::new();
    if let Some(category) = &query.category {
        fields.push(HiddenField {
            name: "category",
            value: category.clone(),
        });
    }
    if let Some(index) = query.price_range {
        fields.push(HiddenField {
            name: "price",
            value: index.to_string(),
        });
    }
    if let Some(search) = &query.search {
        fields.push(HiddenField {
            name: "q",
            value: search.clone(),
        });
    }
    if query.page > 1 {
        fields.push(HiddenField {
            name: "page",
            value: query.page.to_string(),
        });
    }
    if state.view != ViewMode::Grid {
        fields.push(HiddenField {
            name: "view",
            value: state.view.as_str().to_string(),
        });
    }
    fields
}

fn chips(state: &AppState, shop: &ShopState, page: &Page) -> Vec<FilterChip> {
    let query = &shop.query;
    let mut chips = Vec::new();

    if let Some(category) = &query.category {
        let label = state
            .catalog()
            .category_by_id(category)
            .map_or_else(|| category.clone(), |c| c.name.clone());
        chips.push(FilterChip {
            label,
            remove_href: shop.href(&query.with_category(None)),
        });
    }
    if let Some(range) = query.price_bracket() {
        chips.push(FilterChip {
            label: range.label(),
            remove_href: shop.href(&query.without_price_range()),
        });
    }
    if let Some(search) = &query.search {
        let mut without = query.with_page(1);
        without.search = None;
        chips.push(FilterChip {
            label: page.translator().t_with("shop.search_for", &[("query", search)]),
            remove_href: shop.href(&without),
        });
    }
    chips
}

/// Display the shop listing.
///
/// Every control is a link or GET form over `category`, `price`, `q`,
/// `sort`, `page` and `view`.
#[instrument(skip(state, page, uri))]
pub async fn index(State(state): State<AppState>, page: Page, uri: Uri) -> ShopTemplate {
    let params = QueryParams::from_uri(&uri);
    let shop = ShopState::from_params(&params);
    let t = page.translator();

    let matching = shop.query.apply(state.catalog().products());
    let listing = Paginated::new(matching, shop.query.page, state.config().shop_page_size);
    tracing::debug!(
        total = listing.total_items,
        page = listing.page,
        pages = listing.total_pages,
        "Shop listing"
    );

    let heading = shop
        .query
        .category
        .as_deref()
        .and_then(|id| state.catalog().category_by_id(id))
        .map_or_else(|| t.t("shop.all_products"), |c| c.name.clone());

    let sort_options = SortKey::ALL
        .into_iter()
        .map(|key| SortOption {
            value: key.as_str(),
            label: t.t(key.label_key()),
            selected: key == shop.query.sort,
        })
        .collect();

    ShopTemplate {
        heading,
        sidebar: ShopSidebarView::new(state.catalog(), &shop, t),
        count_label: t.t_count("shop.products_count", listing.total_items),
        sort_options,
        hidden_fields: hidden_fields(&shop),
        list_view: shop.view == ViewMode::List,
        grid_href: shop.view_href(ViewMode::Grid),
        list_href: shop.view_href(ViewMode::List),
        chips: chips(&state, &shop, &page),
        products: ProductCardView::list(listing.items.iter().copied(), t),
        pager: PagerView::new(&listing, &shop),
        filters_href: page.drawer_href(DrawerKind::Filters.as_str()),
        page,
    }
}
