//! Product detail route handler.
//!
//! Gallery position, quantity and the open tab live in the query string
//! (`?image=`, `?qty=`, `?tab=`), so every control on the page is a link.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use souq_core::cart::Quantity;
use souq_core::catalog::{Product, RELATED_PRODUCTS_LIMIT};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::product::stars;
use crate::views::query::{append_param, with_query};
use crate::views::{Page, ProductCardView, QueryParams};

/// Share of reviews per star rating, five stars first.
const RATING_DISTRIBUTION: [(u8, u32); 5] = [(5, 68), (4, 22), (3, 7), (2, 2), (1, 1)];

/// Product detail tabs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProductTab {
    #[default]
    Description,
    Info,
    Reviews,
}

impl ProductTab {
    const ALL: [Self; 3] = [Self::Description, Self::Info, Self::Reviews];

    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "info" => Self::Info,
            "reviews" => Self::Reviews,
            _ => Self::Description,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Info => "info",
            Self::Reviews => "reviews",
        }
    }

    const fn label_key(self) -> &'static str {
        match self {
            Self::Description => "product.description",
            Self::Info => "product.additional_info",
            Self::Reviews => "product.reviews_tab",
        }
    }
}

/// Page state read from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductState {
    pub image: usize,
    pub quantity: u32,
    pub tab: ProductTab,
}

impl ProductState {
    /// Out-of-range images fall back to the first; quantity is clamped to
    /// `1..=99`.
    #[must_use]
    pub fn from_params(params: &QueryParams, product: &Product) -> Self {
        Self {
            image: params
                .parse::<usize>("image")
                .filter(|index| *index < product.images.len())
                .unwrap_or(0),
            quantity: params
                .parse::<u32>("qty")
                .unwrap_or(1)
                .clamp(1, Quantity::MAX.get()),
            tab: params.get("tab").map(ProductTab::parse).unwrap_or_default(),
        }
    }
}

pub struct ThumbView {
    pub image: String,
    pub href: String,
    pub active: bool,
}

pub struct SwatchView {
    pub name: String,
    pub hex: String,
    /// Light swatches get a dark check mark.
    pub light: bool,
    pub checked: bool,
}

pub struct TabLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub struct InfoRow {
    pub label: String,
    pub value: String,
}

pub struct RatingBar {
    pub stars: u8,
    pub percent: u32,
}

pub struct ReviewView {
    pub initial: char,
    pub name: &'static str,
    pub date: String,
    pub text: String,
    pub stars: Vec<&'static str>,
}

pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product.html")]
pub struct ProductTemplate {
    pub page: Page,
    pub product: ProductCardView,
    pub sku: String,
    pub category_label: String,
    pub category_href: String,
    pub tags: Vec<String>,
    pub main_image: String,
    pub thumbs: Vec<ThumbView>,
    pub prev_image_href: String,
    pub next_image_href: String,
    pub you_save: Option<String>,
    pub sizes: Vec<String>,
    /// Set when the product has a single size, posted as a hidden field.
    pub single_size: Option<String>,
    pub colors: Vec<SwatchView>,
    pub quantity: u32,
    pub at_minimum: bool,
    pub at_maximum: bool,
    pub decrement_href: String,
    pub increment_href: String,
    pub tabs: Vec<TabLink>,
    pub tab: &'static str,
    pub features: Vec<String>,
    pub info: Vec<InfoRow>,
    pub distribution: Vec<RatingBar>,
    pub based_on: String,
    pub reviews: Vec<ReviewView>,
    pub share: Vec<ShareLink>,
    pub related: Vec<ProductCardView>,
}

/// Fallback page for an unknown slug.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product_not_found.html")]
pub struct ProductNotFoundTemplate {
    pub page: Page,
}

/// Same page with one query parameter replaced.
fn replace_param(path: &str, params: &QueryParams, key: &str, value: &str) -> String {
    let base = with_query(path, &params.encode_without(&["drawer", "account", key]));
    append_param(&base, key, value)
}

fn share_links(base_url: &str, product: &Product) -> Vec<ShareLink> {
    let url = format!("{}/product/{}", base_url.trim_end_matches('/'), product.slug);
    let url = urlencoding::encode(&url);
    let text = urlencoding::encode(&product.name);
    vec![
        ShareLink {
            label: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        },
        ShareLink {
            label: "Twitter",
            href: format!("https://twitter.com/intent/tweet?url={url}&text={text}"),
        },
        ShareLink {
            label: "Pinterest",
            href: format!("https://pinterest.com/pin/create/button/?url={url}&description={text}"),
        },
    ]
}

fn info_rows(page: &Page) -> Vec<InfoRow> {
    [
        ("product.material", Some("product.material_value"), ""),
        ("product.weight", None, "0.3 kg"),
        ("product.dimensions", Some("product.dimensions_value"), ""),
        ("product.care", Some("product.care_value"), ""),
        ("product.origin", Some("product.origin_value"), ""),
    ]
    .into_iter()
    .map(|(label, value_key, literal)| InfoRow {
        label: page.t(label),
        value: value_key.map_or_else(|| literal.to_string(), |key| page.t(key)),
    })
    .collect()
}

fn sample_reviews(page: &Page) -> Vec<ReviewView> {
    [
        ("Sarah M.", 5, "product.review_date_1", "product.review_text_1"),
        ("Alex K.", 4, "product.review_date_2", "product.review_text_2"),
    ]
    .into_iter()
    .map(|(name, rating, date, text)| ReviewView {
        initial: name.chars().next().unwrap_or('?'),
        name,
        date: page.t(date),
        text: page.t(text),
        stars: stars(rating),
    })
    .collect()
}

fn render_product(state: &AppState, page: Page, product: &Product, uri: &Uri) -> ProductTemplate {
    let params = QueryParams::from_uri(uri);
    let view = ProductState::from_params(&params, product);
    let path = uri.path();
    let t = page.translator();

    let thumbs = product
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| ThumbView {
            image: image.clone(),
            href: replace_param(path, &params, "image", &index.to_string()),
            active: index == view.image,
        })
        .collect();

    // Selections are radios; the first option starts checked.
    let colors = product
        .colors
        .iter()
        .enumerate()
        .map(|(index, color)| SwatchView {
            name: color.name.clone(),
            hex: color.hex.clone(),
            light: color.is_light(),
            checked: index == 0,
        })
        .collect();

    let tabs = ProductTab::ALL
        .into_iter()
        .map(|tab| TabLink {
            label: t.t(tab.label_key()),
            href: replace_param(path, &params, "tab", tab.as_str()),
            active: tab == view.tab,
        })
        .collect();

    let features = (1..=5)
        .map(|n| t.t(&format!("product.feature_{n}")))
        .collect();

    let distribution = RATING_DISTRIBUTION
        .into_iter()
        .map(|(stars, percent)| RatingBar { stars, percent })
        .collect();

    ProductTemplate {
        product: ProductCardView::new(product, t),
        sku: product.sku.clone(),
        category_label: product.category_label(),
        category_href: append_param("/shop", "category", &product.category),
        tags: product.tags.clone(),
        main_image: product.image_at(view.image).to_string(),
        thumbs,
        prev_image_href: replace_param(
            path,
            &params,
            "image",
            &product.prev_image(view.image).to_string(),
        ),
        next_image_href: replace_param(
            path,
            &params,
            "image",
            &product.next_image(view.image).to_string(),
        ),
        you_save: product
            .has_discount()
            .then(|| t.t_with("product.you_save", &[("amount", &product.savings().display_compact())])),
        sizes: if product.has_size_choice() {
            product.sizes.clone()
        } else {
            Vec::new()
        },
        single_size: if product.has_size_choice() {
            None
        } else {
            product.sizes.first().cloned()
        },
        colors,
        quantity: view.quantity,
        at_minimum: view.quantity <= 1,
        at_maximum: view.quantity >= Quantity::MAX.get(),
        decrement_href: replace_param(
            path,
            &params,
            "qty",
            &view.quantity.saturating_sub(1).max(1).to_string(),
        ),
        increment_href: replace_param(
            path,
            &params,
            "qty",
            &view.quantity.saturating_add(1).min(Quantity::MAX.get()).to_string(),
        ),
        tabs,
        tab: view.tab.as_str(),
        features,
        info: info_rows(&page),
        distribution,
        based_on: t.t_with("product.based_on", &[("count", &product.reviews.to_string())]),
        reviews: sample_reviews(&page),
        share: share_links(&state.config().base_url, product),
        related: ProductCardView::list(
            state.catalog().related(product, RELATED_PRODUCTS_LIMIT),
            t,
        ),
        page,
    }
}

/// Display a product.
///
/// An unknown slug renders the "product not found" page with a 404 status.
#[instrument(skip(state, page, uri))]
pub async fn show(
    State(state): State<AppState>,
    page: Page,
    Path(slug): Path<String>,
    uri: Uri,
) -> Response {
    let Some(product) = state.catalog().product_by_slug(&slug) else {
        tracing::debug!(%slug, "Unknown product");
        return (StatusCode::NOT_FOUND, ProductNotFoundTemplate { page }).into_response();
    };

    render_product(&state, page, product, &uri).into_response()
}
