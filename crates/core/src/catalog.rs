//! Catalog schema and the in-memory catalog.
//!
//! The catalog is a static dataset standing in for a future product API.
//! Every entity is created once at startup and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Availability, Price, ProductId};

/// Maximum number of related products shown on a product page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Number of suggested products in the search drawer when no query is typed.
pub const SEARCH_SUGGESTIONS: usize = 3;

/// Maximum number of search drawer results for a query.
pub const SEARCH_RESULTS_LIMIT: usize = 5;

/// Swatch colours light enough that the selected check mark must be dark.
const LIGHT_SWATCHES: &[&str] = &["#f5f5dc", "#ffd700", "#ffffff"];

/// A named colour variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub hex: String,
}

impl ColorOption {
    /// Whether the swatch needs a dark foreground for contrast.
    #[must_use]
    pub fn is_light(&self) -> bool {
        LIGHT_SWATCHES
            .iter()
            .any(|light| light.eq_ignore_ascii_case(&self.hex))
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_price: Decimal,
    /// Display rating on a 0-5 scale. Not computed from any review store.
    pub rating: f32,
    /// Review count. Not computed from any review store.
    pub reviews: u32,
    pub image: String,
    pub images: Vec<String>,
    /// Precomputed discount percentage.
    pub discount: u32,
    /// Category slug, which is also the category's id.
    pub category: String,
    pub vendor: String,
    pub sku: String,
    pub description: String,
    pub availability: Availability,
    pub tags: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<ColorOption>,
}

impl Product {
    /// Current selling price.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }

    /// Price before discount.
    #[must_use]
    pub const fn list_price(&self) -> Price {
        Price::usd(self.original_price)
    }

    /// Whether the product sells below its original price.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price > self.price
    }

    /// Amount saved against the original price.
    #[must_use]
    pub fn savings(&self) -> Price {
        self.list_price() - self.unit_price()
    }

    /// Category slug with the first letter upper-cased ("men" -> "Men").
    #[must_use]
    pub fn category_label(&self) -> String {
        let mut chars = self.category.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Number of filled stars for the rating.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled_stars(&self) -> u8 {
        self.rating.round().clamp(0.0, 5.0) as u8
    }

    /// Image at a gallery position, falling back to the cover image.
    #[must_use]
    pub fn image_at(&self, index: usize) -> &str {
        self.images.get(index).map_or(self.image.as_str(), String::as_str)
    }

    /// Gallery position after `index`, wrapping to the first image.
    #[must_use]
    pub fn next_image(&self, index: usize) -> usize {
        if index + 1 < self.images.len() {
            index + 1
        } else {
            0
        }
    }

    /// Gallery position before `index`, wrapping to the last image.
    #[must_use]
    pub fn prev_image(&self, index: usize) -> usize {
        if index > 0 {
            index - 1
        } else {
            self.images.len().saturating_sub(1)
        }
    }

    /// Whether the size selector should be shown.
    #[must_use]
    pub fn has_size_choice(&self) -> bool {
        self.sizes.len() > 1
    }
}

/// A product category. The id and the slug are the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Precomputed product count. Not derived from the product list.
    pub count: u32,
    pub image: String,
}

/// A shop price bracket. `max` of `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// Whether a price falls inside `[min, max)`.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.is_none_or(|max| price < max)
    }

    /// Human label (e.g., "$25 – $50", "Under $25", "$200+").
    #[must_use]
    pub fn label(&self) -> String {
        let min = Price::usd(self.min).display_compact();
        match self.max {
            Some(max) if self.min.is_zero() => {
                format!("Under {}", Price::usd(max).display_compact())
            }
            Some(max) => format!("{min} – {}", Price::usd(max).display_compact()),
            None => format!("{min}+"),
        }
    }
}

/// The fixed shop price brackets.
pub const PRICE_RANGES: [PriceRange; 5] = [
    PriceRange {
        min: Decimal::ZERO,
        max: Some(Decimal::from_parts(25, 0, 0, false, 0)),
    },
    PriceRange {
        min: Decimal::from_parts(25, 0, 0, false, 0),
        max: Some(Decimal::from_parts(50, 0, 0, false, 0)),
    },
    PriceRange {
        min: Decimal::from_parts(50, 0, 0, false, 0),
        max: Some(Decimal::from_parts(100, 0, 0, false, 0)),
    },
    PriceRange {
        min: Decimal::from_parts(100, 0, 0, false, 0),
        max: Some(Decimal::from_parts(200, 0, 0, false, 0)),
    },
    PriceRange {
        min: Decimal::from_parts(200, 0, 0, false, 0),
        max: None,
    },
];

/// Errors loading a catalog dataset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product slug: {0}")]
    DuplicateSlug(String),
    #[error("product {product} references unknown category {category}")]
    UnknownCategory { product: String, category: String },
    #[error("category id {id} differs from its slug {slug}")]
    CategorySlug { id: String, slug: String },
}

#[derive(Deserialize)]
struct CatalogData {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-parsed categories and products.
    #[must_use]
    pub const fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Parse a catalog from its JSON form (`{"categories": [...], "products": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a category's id is not its
    /// slug, two products share a slug, or a product names a category that
    /// does not exist.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        if let Some(category) = data.categories.iter().find(|c| c.id != c.slug) {
            return Err(CatalogError::CategorySlug {
                id: category.id.clone(),
                slug: category.slug.clone(),
            });
        }

        for (index, product) in data.products.iter().enumerate() {
            if data
                .products
                .iter()
                .skip(index + 1)
                .any(|other| other.slug == product.slug)
            {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
            if !data.categories.iter().any(|c| c.id == product.category) {
                return Err(CatalogError::UnknownCategory {
                    product: product.slug.clone(),
                    category: product.category.clone(),
                });
            }
        }

        Ok(Self::new(data.categories, data.products))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    #[must_use]
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Products whose category slug equals `category`.
    pub fn products_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Products from the same category, excluding the product itself.
    #[must_use]
    pub fn related<'a>(&'a self, product: &Product, limit: usize) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Number of products with the given availability.
    #[must_use]
    pub fn availability_count(&self, availability: Availability) -> usize {
        self.products
            .iter()
            .filter(|p| p.availability == availability)
            .count()
    }

    /// Products with the deepest discounts first.
    #[must_use]
    pub fn hot_deals(&self, limit: usize) -> Vec<&Product> {
        let mut deals: Vec<&Product> = self.products.iter().filter(|p| p.discount > 0).collect();
        deals.sort_by(|a, b| b.discount.cmp(&a.discount));
        deals.truncate(limit);
        deals
    }

    /// Search drawer lookup.
    ///
    /// An empty query returns the first few products as suggestions; otherwise
    /// products whose name contains the query (case-insensitive).
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return self.products.iter().take(SEARCH_SUGGESTIONS).collect();
        }
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(SEARCH_RESULTS_LIMIT)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
pub(crate) mod tests {
    use super::*;

    /// A small catalog shared by the core crate's tests.
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::from_json(SAMPLE).unwrap()
    }

    pub(crate) const SAMPLE: &str = r##"{
        "categories": [
            {"id": "women", "name": "Women", "slug": "women", "count": 48, "image": "w.jpg"},
            {"id": "men", "name": "Men", "slug": "men", "count": 36, "image": "m.jpg"},
            {"id": "bags", "name": "Bags", "slug": "bags", "count": 15, "image": "b.jpg"}
        ],
        "products": [
            {"id": 1, "name": "Elegant Floral Summer Dress", "slug": "dress", "price": "79",
             "originalPrice": "129", "rating": 4.8, "reviews": 1240, "image": "d.jpg",
             "images": ["d1.jpg", "d2.jpg", "d3.jpg"], "discount": 39, "category": "women",
             "vendor": "FashionHouse", "sku": "FH-1", "description": "Dress",
             "availability": "in-stock", "tags": ["summer"], "sizes": ["S", "M"],
             "colors": [{"name": "Rose Pink", "hex": "#e8a0bf"}]},
            {"id": 2, "name": "classic cotton T-Shirt", "slug": "tshirt", "price": "35",
             "originalPrice": "55", "rating": 4.6, "reviews": 856, "image": "t.jpg",
             "images": ["t1.jpg"], "discount": 36, "category": "men",
             "vendor": "BasicWear", "sku": "BW-2", "description": "Tee",
             "availability": "in-stock", "tags": [], "sizes": ["M"],
             "colors": [{"name": "White", "hex": "#ffffff"}]},
            {"id": 3, "name": "Premium Leather Jacket", "slug": "jacket", "price": "149",
             "originalPrice": "199", "rating": 4.9, "reviews": 2103, "image": "j.jpg",
             "images": ["j1.jpg", "j2.jpg"], "discount": 25, "category": "men",
             "vendor": "LeatherCraft", "sku": "LC-3", "description": "Jacket",
             "availability": "low-stock", "tags": [], "sizes": ["L"],
             "colors": [{"name": "Black", "hex": "#1a1a1a"}]},
            {"id": 4, "name": "Designer Crossbody Bag", "slug": "bag", "price": "89",
             "originalPrice": "150", "rating": 4.7, "reviews": 654, "image": "b.jpg",
             "images": [], "discount": 41, "category": "bags",
             "vendor": "BagBoutique", "sku": "BB-4", "description": "Bag",
             "availability": "in-stock", "tags": [], "sizes": ["One Size"],
             "colors": []},
            {"id": 5, "name": "Oversized Wool Coat", "slug": "coat", "price": "189",
             "originalPrice": "280", "rating": 4.9, "reviews": 567, "image": "c.jpg",
             "images": ["c1.jpg"], "discount": 33, "category": "women",
             "vendor": "WinterChic", "sku": "WC-5", "description": "Coat",
             "availability": "low-stock", "tags": [], "sizes": ["S", "M", "L"],
             "colors": []},
            {"id": 6, "name": "Minimal Gold Necklace", "slug": "necklace", "price": "242",
             "originalPrice": "242", "rating": 4.2, "reviews": 10, "image": "n.jpg",
             "images": ["n1.jpg"], "discount": 0, "category": "women",
             "vendor": "GoldLine", "sku": "GL-6", "description": "Necklace",
             "availability": "out-of-stock", "tags": [], "sizes": ["16 inch"],
             "colors": []}
        ]
    }"##;

    #[test]
    fn test_from_json_parses_products() {
        let catalog = sample_catalog();
        assert_eq!(catalog.products().len(), 6);
        assert_eq!(catalog.categories().len(), 3);
        let dress = catalog.product_by_slug("dress").unwrap();
        assert_eq!(dress.unit_price().display_compact(), "$79");
        assert_eq!(dress.savings().display_compact(), "$50");
        assert!(dress.has_discount());
    }

    #[test]
    fn test_from_json_rejects_duplicate_slug() {
        let json = SAMPLE.replace("\"slug\": \"tshirt\"", "\"slug\": \"dress\"");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::DuplicateSlug(slug)) if slug == "dress"
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = SAMPLE.replace("\"category\": \"bags\"", "\"category\": \"toys\"");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_category_slug_mismatch() {
        let json = SAMPLE.replace(
            "\"name\": \"Bags\", \"slug\": \"bags\"",
            "\"name\": \"Bags\", \"slug\": \"handbags\"",
        );
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::CategorySlug { id, slug }) if id == "bags" && slug == "handbags"
        ));
    }

    #[test]
    fn test_related_excludes_self_and_other_categories() {
        let catalog = sample_catalog();
        let dress = catalog.product_by_slug("dress").unwrap();
        let related = catalog.related(dress, RELATED_PRODUCTS_LIMIT);
        let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["coat", "necklace"]);
    }

    #[test]
    fn test_products_by_category() {
        let catalog = sample_catalog();
        let slugs: Vec<&str> = catalog
            .products_by_category("men")
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs.len(), 2);
        assert_eq!(catalog.products_by_category("toys").count(), 0);
    }

    #[test]
    fn test_related_outlives_the_product_argument() {
        let catalog = sample_catalog();
        let related = {
            let dress = catalog.product_by_slug("dress").unwrap().clone();
            catalog.related(&dress, 1)
        };
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "coat");
    }

    #[test]
    fn test_gallery_navigation_wraps() {
        let catalog = sample_catalog();
        let dress = catalog.product_by_slug("dress").unwrap();
        assert_eq!(dress.next_image(0), 1);
        assert_eq!(dress.next_image(2), 0);
        assert_eq!(dress.prev_image(0), 2);
        assert_eq!(dress.image_at(1), "d2.jpg");
        assert_eq!(dress.image_at(9), "d.jpg");

        let bag = catalog.product_by_slug("bag").unwrap();
        assert_eq!(bag.prev_image(0), 0);
        assert_eq!(bag.next_image(0), 0);
    }

    #[test]
    fn test_price_range_membership_is_half_open() {
        let range = PRICE_RANGES[1];
        assert!(range.contains(Decimal::new(25, 0)));
        assert!(range.contains(Decimal::new(4999, 2)));
        assert!(!range.contains(Decimal::new(50, 0)));
        assert!(PRICE_RANGES[4].contains(Decimal::new(10_000, 0)));
    }

    #[test]
    fn test_price_range_labels() {
        let labels: Vec<String> = PRICE_RANGES.iter().map(PriceRange::label).collect();
        assert_eq!(
            labels,
            ["Under $25", "$25 – $50", "$50 – $100", "$100 – $200", "$200+"]
        );
    }

    #[test]
    fn test_search_suggestions_and_matches() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("  ").len(), SEARCH_SUGGESTIONS);
        let hits = catalog.search("COTTON");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "tshirt");
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_hot_deals_ordered_by_discount() {
        let catalog = sample_catalog();
        let deals: Vec<u32> = catalog.hot_deals(3).iter().map(|p| p.discount).collect();
        assert_eq!(deals, [41, 39, 36]);
    }

    #[test]
    fn test_availability_count() {
        let catalog = sample_catalog();
        assert_eq!(catalog.availability_count(Availability::InStock), 3);
        assert_eq!(catalog.availability_count(Availability::LowStock), 2);
    }

    #[test]
    fn test_category_label_and_stars() {
        let catalog = sample_catalog();
        let tee = catalog.product_by_slug("tshirt").unwrap();
        assert_eq!(tee.category_label(), "Men");
        assert_eq!(tee.filled_stars(), 5);
        assert!(tee.colors[0].is_light());
    }
}
