//! Static marketing content for the home page and header menu.
//!
//! This copy is editorial and ships in English for both locales. Section
//! headings around it come from the translation tables.

/// Hero carousel autoplay interval.
pub const HERO_AUTOPLAY_MS: u32 = 6000;

/// A single slide in the hero carousel.
#[derive(Clone, Debug)]
pub struct HeroSlide {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
    pub image: &'static str,
}

pub static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        eyebrow: "Spring Collection 2024",
        title: "Fresh Finds for Every Occasion",
        description: "Discover our curated selection of sustainable, high-quality products.",
        button_text: "Shop Now",
        button_url: "/shop",
        image: "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?w=1920&q=80",
    },
    HeroSlide {
        eyebrow: "Eco-Friendly Living",
        title: "Sustainable Choices, Beautiful Results",
        description: "Join the movement towards conscious consumption.",
        button_text: "Explore Collection",
        button_url: "/shop?sort=newest",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=1920&q=80",
    },
    HeroSlide {
        eyebrow: "Limited Edition",
        title: "Artisan Crafted Excellence",
        description: "Handpicked items from the world's finest creators.",
        button_text: "View Products",
        button_url: "/shop?sort=rating",
        image: "https://images.unsplash.com/photo-1607082348824-0a96f2a4b9da?w=1920&q=80",
    },
];

/// A colored promo tile.
#[derive(Clone, Debug)]
pub struct PromoBanner {
    pub badge: &'static str,
    /// Title lines, rendered with a break between them.
    pub title: [&'static str; 2],
    pub button_text: &'static str,
    pub link: &'static str,
    pub image: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
}

pub static PROMO_BANNERS: [PromoBanner; 3] = [
    PromoBanner {
        badge: "100% Organic",
        title: ["Quality Organic", "Food Store"],
        button_text: "SHOP NOW",
        link: "/shop",
        image: "https://images.unsplash.com/photo-1542838132-92c53300491e?w=800&q=80",
        bg_color: "#E5C849",
        text_color: "#164333",
    },
    PromoBanner {
        badge: "100% Organic",
        title: ["Healthy Products", "Everyday"],
        button_text: "SHOP NOW",
        link: "/shop",
        image: "https://images.unsplash.com/photo-1610832958506-aa56368176cf?w=800&q=80",
        bg_color: "#43aa5c",
        text_color: "#ffffff",
    },
    PromoBanner {
        badge: "100% Organic",
        title: ["Pure Natural", "Products"],
        button_text: "SHOP NOW",
        link: "/shop",
        image: "https://images.unsplash.com/photo-1490818387583-1baba5e638af?w=800&q=80",
        bg_color: "#164333",
        text_color: "#ffffff",
    },
];

/// The welcome section beside the promo tiles.
#[derive(Clone, Debug)]
pub struct WelcomeCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Feature blocks: title and one-line description.
    pub features: [(&'static str, &'static str); 2],
    pub image: &'static str,
    pub inset_image: &'static str,
    /// YouTube id of the story video.
    pub video_id: &'static str,
    pub link: &'static str,
}

pub static WELCOME: WelcomeCopy = WelcomeCopy {
    eyebrow: "Welcome to Souq",
    title: "Made by independent makers, chosen with care",
    description: "Souq brings together small studios and family workshops from across \
                  the region. Every piece is checked by our team before it reaches your door.",
    features: [
        ("Trusted Makers", "Every studio is visited and vetted before it joins the market."),
        ("Fair Prices", "Makers set their own prices and keep most of every sale."),
    ],
    image: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=600&q=80",
    inset_image: "https://images.unsplash.com/photo-1546548970-71785318a17b?w=300&q=80",
    video_id: "Qyd6ZDPWPbw",
    link: "/shop",
};

/// Embed URL for [`WelcomeCopy::video_id`].
#[must_use]
pub fn video_embed_url(video_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{video_id}?autoplay=1&rel=0")
}

/// Full-width banner between the hot deals and the brand strip.
#[derive(Clone, Debug)]
pub struct SpotlightBanner {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

pub static SPOTLIGHT: SpotlightBanner = SpotlightBanner {
    badge: "Subscribe & Save 15%",
    title: "Join Our Newsletter",
    description: "Get exclusive access to new arrivals, special offers, and insider-only discounts",
    button_text: "Subscribe Now",
    link: "#newsletter",
    image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=1920&q=80",
};

/// Instagram profile the gallery tiles link to.
pub const INSTAGRAM_URL: &str = "https://instagram.com";

pub static INSTAGRAM_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?w=400&q=80",
    "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=400&q=80",
    "https://images.unsplash.com/photo-1467043237213-65f2da53396f?w=400&q=80",
    "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=400&q=80",
    "https://images.unsplash.com/photo-1485462537746-965f33f7f6a7?w=400&q=80",
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&q=80",
];

/// Deal of the day copy. The deadline comes from application state.
#[derive(Clone, Debug)]
pub struct DealCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub rating: u8,
    pub link: &'static str,
}

pub const DEAL: DealCopy = DealCopy {
    title: "Premium Smart Watch Pro X",
    description: "Experience the future on your wrist with our flagship smartwatch. \
                  Advanced health tracking, seamless connectivity, and stunning design.",
    rating: 5,
    link: "/shop",
};

#[derive(Clone, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Fashion Enthusiast",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&q=80",
        content: "The quality of products here is unmatched. Fast shipping and amazing \
                  customer service made my shopping experience absolutely delightful!",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Tech Professional",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&q=80",
        content: "I've been a loyal customer for 3 years. The curated selection of products \
                  saves me so much time, and the prices are always competitive.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Interior Designer",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&q=80",
        content: "Found unique home decor pieces I couldn't find anywhere else. The \
                  eco-friendly packaging was a pleasant surprise. Highly recommend!",
        rating: 5,
    },
];

/// Headline numbers under the testimonials.
pub static STATS: [(&str, &str); 4] = [
    ("50K+", "Happy Customers"),
    ("100K+", "Products Sold"),
    ("4.9", "Average Rating"),
    ("99%", "Satisfaction Rate"),
];

/// Brand strip entries: name and glyph.
pub static BRANDS: [(&str, &str); 10] = [
    ("Apple", "🍎"),
    ("Nike", "✓"),
    ("Samsung", "S"),
    ("Adidas", "⚡"),
    ("Sony", "🎵"),
    ("Puma", "🐆"),
    ("LG", "📺"),
    ("Canon", "📷"),
    ("Dell", "💻"),
    ("HP", "🖨️"),
];

#[derive(Clone, Debug)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub author: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "10 Sustainable Fashion Trends to Watch in 2024",
        excerpt: "Discover how eco-conscious choices are shaping the future of fashion and style.",
        image: "https://images.unsplash.com/photo-1558171813-4c088753af8f?w=600&q=80",
        category: "Fashion",
        date: "Feb 5, 2024",
        author: "Emma Wilson",
    },
    BlogPost {
        title: "The Ultimate Guide to Smart Home Devices",
        excerpt: "Transform your living space with the latest in home automation technology.",
        image: "https://images.unsplash.com/photo-1558002038-1055907df827?w=600&q=80",
        category: "Tech",
        date: "Feb 3, 2024",
        author: "James Miller",
    },
    BlogPost {
        title: "Minimalist Living: Less is More",
        excerpt: "How decluttering your space can lead to a more peaceful and productive life.",
        image: "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?w=600&q=80",
        category: "Lifestyle",
        date: "Feb 1, 2024",
        author: "Sophie Clark",
    },
];

/// Header mega-menu: a category key and its subcategory keys.
///
/// Keys resolve under `header.categories.*` and `header.subcategories.*`.
pub static MENU: [(&str, [&str; 4]); 4] = [
    ("electronics", ["phones", "laptops", "tablets", "accessories"]),
    ("fashion", ["men", "women", "kids", "shoes"]),
    ("homeAndLiving", ["furniture", "decor", "kitchen", "garden"]),
    ("beauty", ["skincare", "makeup", "hairCare", "fragrances"]),
];

/// Slide index after `current`, wrapping around.
#[must_use]
pub fn next_slide(current: usize) -> usize {
    (current + 1) % HERO_SLIDES.len()
}

/// Slide index before `current`, wrapping around.
#[must_use]
pub fn prev_slide(current: usize) -> usize {
    (current + HERO_SLIDES.len() - 1) % HERO_SLIDES.len()
}
