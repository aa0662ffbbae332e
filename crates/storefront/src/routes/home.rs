//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::http::Uri;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::content::{
    self, BLOG_POSTS, BRANDS, BlogPost, DEAL, HERO_AUTOPLAY_MS, HERO_SLIDES, HeroSlide,
    INSTAGRAM_IMAGES, INSTAGRAM_URL, PROMO_BANNERS, PromoBanner, SPOTLIGHT, SpotlightBanner,
    STATS, TESTIMONIALS, WELCOME, WelcomeCopy,
};
use crate::filters;
use crate::state::AppState;
use crate::views::product::stars;
use crate::views::query::{QueryParams, append_param, with_query};
use crate::views::{Page, ProductCardView};

/// Number of products in the hot deals strip.
const HOT_DEALS_LIMIT: usize = 4;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub slide: Option<usize>,
    /// `open` shows the story video modal.
    pub video: Option<String>,
}

/// Welcome section with its video modal links.
pub struct WelcomeView {
    pub copy: &'static WelcomeCopy,
    pub video_open: bool,
    pub open_href: String,
    pub close_href: String,
    pub embed_url: String,
}

impl WelcomeView {
    /// Open and close links keep the rest of the home page state.
    fn new(params: &QueryParams, video_open: bool) -> Self {
        let close_href = with_query("/", &params.encode_without(&["video"]));
        Self {
            copy: &WELCOME,
            video_open,
            open_href: append_param(&close_href, "video", "open"),
            close_href,
            embed_url: content::video_embed_url(WELCOME.video_id),
        }
    }
}

pub struct InstagramTileView {
    pub image: &'static str,
    pub label: String,
}

/// A hero slide with its carousel position.
pub struct SlideView {
    pub slide: &'static HeroSlide,
    pub active: bool,
    pub dot_href: String,
    pub dot_label: String,
}

/// A category tile on the home page.
pub struct CategoryTileView {
    pub name: String,
    pub href: String,
    pub image: String,
    pub count_label: String,
}

/// One countdown unit ("02" / "Days").
pub struct CountdownUnit {
    pub value: String,
    pub label: String,
}

/// Deal of the day section.
pub struct DealView {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub stars: Vec<&'static str>,
    pub units: Vec<CountdownUnit>,
    pub ended: bool,
    /// Deadline for the client-side ticker (RFC 3339).
    pub ends_at: String,
}

pub struct TestimonialView {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    pub stars: Vec<&'static str>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub page: Page,
    pub slides: Vec<SlideView>,
    pub prev_slide_href: String,
    pub next_slide_href: String,
    pub autoplay_ms: u32,
    pub banners: &'static [PromoBanner],
    pub categories: Vec<CategoryTileView>,
    pub welcome: WelcomeView,
    pub deal: DealView,
    pub hot_deals: Vec<ProductCardView>,
    pub spotlight: &'static SpotlightBanner,
    pub brands: &'static [(&'static str, &'static str)],
    pub testimonials: Vec<TestimonialView>,
    pub stats: &'static [(&'static str, &'static str)],
    pub posts: &'static [BlogPost],
    pub instagram: Vec<InstagramTileView>,
    pub instagram_url: &'static str,
}

fn slide_href(index: usize) -> String {
    format!("/?slide={index}")
}

fn deal_view(state: &AppState, page: &Page) -> DealView {
    let left = state.deal().time_left(Utc::now());
    let labels = ["deal.days", "deal.hours", "deal.minutes", "deal.seconds"];
    let units = left
        .padded()
        .into_iter()
        .zip(labels)
        .map(|(value, key)| CountdownUnit {
            value,
            label: page.t(key),
        })
        .collect();

    DealView {
        title: DEAL.title,
        description: DEAL.description,
        link: DEAL.link,
        stars: stars(DEAL.rating),
        units,
        ended: left.is_expired(),
        ends_at: state
            .deal()
            .ends_at()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// Display the home page.
#[instrument(skip(state, page))]
pub async fn home(
    State(state): State<AppState>,
    page: Page,
    uri: Uri,
    Query(query): Query<HomeQuery>,
) -> HomeTemplate {
    let active = query.slide.unwrap_or(0) % HERO_SLIDES.len();
    let t = page.translator();

    let slides = HERO_SLIDES
        .iter()
        .enumerate()
        .map(|(index, slide)| SlideView {
            slide,
            active: index == active,
            dot_href: slide_href(index),
            dot_label: t.t_with("hero.go_to", &[("number", &(index + 1).to_string())]),
        })
        .collect();

    let categories = state
        .catalog()
        .categories()
        .iter()
        .map(|category| CategoryTileView {
            name: category.name.clone(),
            href: format!("/shop?category={}", urlencoding::encode(&category.id)),
            image: category.image.clone(),
            count_label: t.t_count("categories.items_count", category.count as usize),
        })
        .collect();

    let testimonials = TESTIMONIALS
        .iter()
        .map(|item| TestimonialView {
            name: item.name,
            role: item.role,
            image: item.image,
            content: item.content,
            stars: stars(item.rating),
        })
        .collect();

    let instagram = INSTAGRAM_IMAGES
        .iter()
        .copied()
        .enumerate()
        .map(|(index, image)| InstagramTileView {
            image,
            label: t.t_with("instagram.post", &[("number", &(index + 1).to_string())]),
        })
        .collect();

    let video_open = query.video.as_deref() == Some("open");

    HomeTemplate {
        slides,
        prev_slide_href: slide_href(content::prev_slide(active)),
        next_slide_href: slide_href(content::next_slide(active)),
        autoplay_ms: HERO_AUTOPLAY_MS,
        banners: &PROMO_BANNERS,
        categories,
        welcome: WelcomeView::new(&QueryParams::from_uri(&uri), video_open),
        deal: deal_view(&state, &page),
        hot_deals: ProductCardView::list(state.catalog().hot_deals(HOT_DEALS_LIMIT), t),
        spotlight: &SPOTLIGHT,
        brands: &BRANDS,
        testimonials,
        stats: &STATS,
        posts: &BLOG_POSTS,
        instagram,
        instagram_url: INSTAGRAM_URL,
        page,
    }
}
