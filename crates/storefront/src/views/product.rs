//! Product display data for templates.

use souq_core::catalog::Product;

use crate::i18n::Translator;

/// Product card display data (grid and list variants share it).
#[derive(Clone, Debug)]
pub struct ProductCardView {
    pub id: i32,
    pub href: String,
    pub name: String,
    pub vendor: String,
    pub image: String,
    pub description: String,
    /// Compact unit price ("$79").
    pub price: String,
    /// Compact list price when the product is discounted.
    pub original_price: Option<String>,
    /// Badge text ("-24%").
    pub discount_badge: Option<String>,
    /// Five star CSS classes, filled ones first.
    pub stars: Vec<&'static str>,
    pub rating: String,
    pub reviews: u32,
    pub availability_class: &'static str,
    pub availability_label: String,
    pub purchasable: bool,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, t: &Translator) -> Self {
        let discount_badge =
            (product.discount > 0).then(|| format!("-{}%", product.discount));

        Self {
            id: product.id.as_i32(),
            href: product_href(&product.slug),
            name: product.name.clone(),
            vendor: product.vendor.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            price: product.unit_price().display_compact(),
            original_price: product
                .has_discount()
                .then(|| product.list_price().display_compact()),
            discount_badge,
            stars: stars(product.filled_stars()),
            rating: format!("{:.1}", product.rating),
            reviews: product.reviews,
            availability_class: product.availability.as_str(),
            availability_label: t.t(product.availability.label_key()),
            purchasable: product.availability.is_purchasable(),
        }
    }

    /// Cards for a list of products.
    #[must_use]
    pub fn list<'a>(products: impl IntoIterator<Item = &'a Product>, t: &Translator) -> Vec<Self> {
        products.into_iter().map(|p| Self::new(p, t)).collect()
    }
}

/// Detail page link for a slug.
#[must_use]
pub fn product_href(slug: &str) -> String {
    format!("/product/{}", urlencoding::encode(slug))
}

/// CSS classes for five rating stars with `filled` of them lit.
#[must_use]
pub fn stars(filled: u8) -> Vec<&'static str> {
    (0..5)
        .map(|i| if i < filled { "star filled" } else { "star" })
        .collect()
}
