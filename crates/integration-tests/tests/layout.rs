//! Locale toggle, drawers and not-found pages.

use souq_integration_tests::TestContext;

#[tokio::test]
async fn test_locale_toggle_flips_direction() {
    let ctx = TestContext::with_vars(&[]).await;

    let (_, body) = ctx.get("/").await;
    assert!(body.contains("<html lang=\"ar\" dir=\"rtl\">"));

    let (status, body) = ctx
        .post("/locale", &[("locale", "en"), ("return_to", "/shop")])
        .await;
    assert_eq!(status, 200);
    assert!(body.contains("<html lang=\"en\" dir=\"ltr\">"));
    assert!(body.contains("All Products"));

    // The choice sticks for later requests
    let (_, body) = ctx.get("/").await;
    assert!(body.contains("dir=\"ltr\""));

    let (status, _) = ctx.post("/locale", &[("locale", "fr")]).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_query_locale_applies_without_session_choice() {
    let ctx = TestContext::with_vars(&[]).await;
    let (_, body) = ctx.get("/shop?lang=en").await;
    assert!(body.contains("dir=\"ltr\""));
}

#[tokio::test]
async fn test_open_drawer_locks_scroll() {
    let ctx = TestContext::new().await;

    let (_, closed) = ctx.get("/shop").await;
    assert!(!closed.contains("scroll-lock"));

    let (status, open) = ctx.get("/shop?drawer=cart").await;
    assert_eq!(status, 200);
    assert!(open.contains("<body class=\"scroll-lock\">"));
    assert!(open.contains("drawer-right"));
    // Close link drops the drawer parameter
    assert!(open.contains("href=\"/shop\""));
}

#[tokio::test]
async fn test_drawer_fragments() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.get("/drawers/search?q=jacket&return_to=/shop").await;
    assert_eq!(status, 200);
    assert!(body.contains("/product/premium-leather-jacket"));
    assert!(!body.contains("<html"));

    let (status, _) = ctx.get("/drawers/wishlist").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;

    let (status, _) = ctx.get("/product/no-such-thing").await;
    assert_eq!(status, 404);

    let (status, body) = ctx.get("/product/silk-blend-scarf?tab=reviews").await;
    assert_eq!(status, 200);
    assert!(body.contains("Silk Blend Scarf"));

    let (status, _) = ctx.get("/health").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_home_video_modal_opens_from_query() {
    let ctx = TestContext::new().await;

    let (status, closed) = ctx.get("/").await;
    assert_eq!(status, 200);
    assert!(closed.contains(r#"href="/?video=open""#));
    assert!(!closed.contains(r#"class="video-modal""#));
    assert!(closed.contains("Follow Us on Instagram"));
    assert!(closed.contains(r#"class="spotlight""#));

    let (status, open) = ctx.get("/?slide=1&video=open").await;
    assert_eq!(status, 200);
    assert!(open.contains(r#"class="video-modal""#));
    assert!(open.contains("https://www.youtube-nocookie.com/embed/Qyd6ZDPWPbw"));
    assert!(open.contains(r#"class="video-close" href="/?slide=1""#));
}

#[tokio::test]
async fn test_stored_locale_beats_query_locale() {
    let ctx = TestContext::new().await;

    ctx.post("/locale", &[("locale", "en"), ("return_to", "/")]).await;
    let (_, body) = ctx.get("/shop?lang=ar").await;
    assert!(body.contains("<html lang=\"en\" dir=\"ltr\">"));
}
