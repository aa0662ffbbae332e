//! Newsletter signup fragment.

use souq_integration_tests::TestContext;

#[tokio::test]
async fn test_valid_signup_thanks_visitor() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.post("/newsletter", &[("email", "Reader@Example.com")]).await;

    assert_eq!(status, 200);
    assert!(body.contains("reader@example.com"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_invalid_signup_returns_bad_request() {
    let ctx = TestContext::new().await;

    for email in ["", "reader", "reader@localhost", "reader@.com"] {
        let (status, body) = ctx.post("/newsletter", &[("email", email)]).await;
        assert_eq!(status, 400, "{email:?}");
        assert!(body.contains("Please enter a valid email address."));
    }
}
