//! Shop listing: filter, sort and paginate the catalog.
//!
//! Everything here is a pure function over a product slice. The storefront
//! maps URL query parameters onto a [`ShopQuery`] and renders the result.

use std::cmp::Ordering;

use crate::catalog::{PRICE_RANGES, PriceRange, Product};

/// Default number of products per shop page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Shop sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    BestSelling,
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// All sort keys in dropdown order.
    pub const ALL: [Self; 8] = [
        Self::Featured,
        Self::BestSelling,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Rating,
        Self::Newest,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Parse from URL parameter value. Unknown values fall back to featured.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "best-selling" => Self::BestSelling,
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            _ => Self::Featured,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::BestSelling => "best-selling",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Translation key for the dropdown label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Featured => "shop.sort.featured",
            Self::BestSelling => "shop.sort.best_selling",
            Self::PriceAsc => "shop.sort.price_asc",
            Self::PriceDesc => "shop.sort.price_desc",
            Self::Rating => "shop.sort.rating",
            Self::Newest => "shop.sort.newest",
            Self::NameAsc => "shop.sort.name_asc",
            Self::NameDesc => "shop.sort.name_desc",
        }
    }

    /// Compare two products under this key. `Featured` keeps catalog order.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::BestSelling => b.reviews.cmp(&a.reviews),
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Newest => b.id.cmp(&a.id),
            Self::NameAsc => compare_names(&a.name, &b.name),
            Self::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Filters and ordering for a shop listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShopQuery {
    /// Category slug to match exactly.
    pub category: Option<String>,
    /// Index into [`PRICE_RANGES`].
    pub price_range: Option<usize>,
    /// Case-insensitive product name filter.
    pub search: Option<String>,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl ShopQuery {
    /// The selected price bracket, if the index is valid.
    #[must_use]
    pub fn price_bracket(&self) -> Option<&'static PriceRange> {
        self.price_range.and_then(|index| PRICE_RANGES.get(index))
    }

    /// Number of active sidebar filters (category and price).
    #[must_use]
    pub fn active_filters_count(&self) -> usize {
        usize::from(self.category.is_some()) + usize::from(self.price_bracket().is_some())
    }

    /// Query with a different category, back on page 1.
    #[must_use]
    pub fn with_category(&self, category: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_owned),
            page: 1,
            ..self.clone()
        }
    }

    /// Query with the price bracket toggled: selecting the active bracket
    /// clears it. Returns to page 1.
    #[must_use]
    pub fn toggle_price_range(&self, index: usize) -> Self {
        let price_range = if self.price_range == Some(index) {
            None
        } else {
            Some(index)
        };
        Self {
            price_range,
            page: 1,
            ..self.clone()
        }
    }

    /// Query without the price filter, back on page 1.
    #[must_use]
    pub fn without_price_range(&self) -> Self {
        Self {
            price_range: None,
            page: 1,
            ..self.clone()
        }
    }

    /// Query with both sidebar filters cleared, back on page 1.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            category: None,
            price_range: None,
            page: 1,
            ..self.clone()
        }
    }

    /// Query with a different sort key. Keeps the current page.
    #[must_use]
    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Query on another page.
    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Whether a product passes the filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category != *category
        {
            return false;
        }
        if let Some(range) = self.price_bracket()
            && !range.contains(product.price)
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }

    /// Filter then sort. The sort is stable, so ties keep catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// 1-based current page, clamped to the valid range.
    pub page: usize,
    /// Total pages (at least 1).
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
}

impl<T> Paginated<T> {
    /// Split `items` into pages of `per_page` and keep page `page`.
    ///
    /// Pages past the end are clamped to the last page; page 0 is treated as 1.
    #[must_use]
    pub fn new(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let items = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            total_pages,
            total_items,
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a pager should be shown at all.
    #[must_use]
    pub const fn needs_pager(&self) -> bool {
        self.total_pages > 1
    }

    /// Page numbers `1..=total_pages`.
    #[must_use]
    pub const fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    fn slugs(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_sort_key_parse_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("bogus"), SortKey::Featured);
    }

    #[test]
    fn test_category_filter_returns_only_that_category() {
        let catalog = sample_catalog();
        let query = ShopQuery::default().with_category(Some("men"));
        let result = query.apply(catalog.products());
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.category == "men"));
    }

    #[test]
    fn test_price_range_filter() {
        let catalog = sample_catalog();
        let query = ShopQuery::default().toggle_price_range(2); // $50 – $100
        assert_eq!(slugs(&query.apply(catalog.products())), ["dress", "bag"]);
    }

    #[test]
    fn test_price_sorts_are_monotonic() {
        let catalog = sample_catalog();
        let asc = ShopQuery::default().with_sort(SortKey::PriceAsc);
        let result = asc.apply(catalog.products());
        assert!(result.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = ShopQuery::default().with_sort(SortKey::PriceDesc);
        let result = desc.apply(catalog.products());
        assert!(result.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_other_sort_keys() {
        let catalog = sample_catalog();
        let products = catalog.products();
        let newest = ShopQuery::default().with_sort(SortKey::Newest).apply(products);
        assert_eq!(newest[0].slug, "necklace");

        let best = ShopQuery::default().with_sort(SortKey::BestSelling).apply(products);
        assert_eq!(best[0].slug, "jacket");

        let by_name = ShopQuery::default().with_sort(SortKey::NameAsc).apply(products);
        assert_eq!(by_name[0].slug, "tshirt"); // "classic" sorts before "Designer"

        let featured = ShopQuery::default().apply(products);
        assert_eq!(slugs(&featured), slugs(&products.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = sample_catalog();
        let rated = ShopQuery::default().with_sort(SortKey::Rating).apply(catalog.products());
        // jacket and coat are both 4.9; jacket comes first in the catalog
        assert_eq!(slugs(&rated[..2]), ["jacket", "coat"]);
    }

    #[test]
    fn test_toggle_price_range_clears_when_active() {
        let query = ShopQuery::default().toggle_price_range(1);
        assert_eq!(query.price_range, Some(1));
        assert_eq!(query.toggle_price_range(1).price_range, None);
        assert_eq!(
            query.toggle_price_range(3).price_range,
            Some(3),
            "a different bracket replaces the active one"
        );
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let query = ShopQuery::default().with_page(3);
        assert_eq!(query.with_category(Some("women")).page, 1);
        assert_eq!(query.toggle_price_range(0).page, 1);
        assert_eq!(query.cleared().page, 1);
        assert_eq!(query.with_sort(SortKey::Rating).page, 3);
    }

    #[test]
    fn test_active_filters_count_ignores_invalid_range() {
        let mut query = ShopQuery::default().with_category(Some("men"));
        assert_eq!(query.active_filters_count(), 1);
        query.price_range = Some(2);
        assert_eq!(query.active_filters_count(), 2);
        query.price_range = Some(99);
        assert_eq!(query.active_filters_count(), 1);
    }

    #[test]
    fn test_search_filter() {
        let catalog = sample_catalog();
        let query = ShopQuery {
            search: Some("JACKET".to_string()),
            ..ShopQuery::default()
        };
        assert_eq!(slugs(&query.apply(catalog.products())), ["jacket"]);
    }

    #[test]
    fn test_pagination_partitions_without_loss() {
        let items: Vec<u32> = (1..=27).collect();
        let mut seen = Vec::new();
        let first = Paginated::new(items.clone(), 1, 12);
        assert_eq!(first.total_pages, 3);
        for page in first.page_numbers() {
            let p = Paginated::new(items.clone(), page, 12);
            assert!(p.items.len() <= 12);
            seen.extend(p.items);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let items: Vec<u32> = (1..=5).collect();
        let past_end = Paginated::new(items.clone(), 9, 2);
        assert_eq!(past_end.page, 3);
        assert_eq!(past_end.items, [5]);
        assert!(!past_end.has_next());
        assert!(past_end.has_prev());

        let zero = Paginated::new(items, 0, 2);
        assert_eq!(zero.page, 1);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let empty = Paginated::<u32>::new(Vec::new(), 4, 12);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.needs_pager());
        assert!(empty.items.is_empty());
    }
}
