//! Checkout wizard from information to order confirmation.

#![allow(clippy::unwrap_used)]

use souq_integration_tests::TestContext;

const INFORMATION: &[(&str, &str)] = &[
    ("email", "layla@example.com"),
    ("phone", "+971500000000"),
    ("first_name", "Layla"),
    ("last_name", "Haddad"),
    ("address", "12 Marina Walk"),
    ("city", "Dubai"),
    ("state", ""),
    ("zip", "00000"),
    ("country", "AE"),
];

#[tokio::test]
async fn test_full_checkout_places_order() {
    let ctx = TestContext::new().await;

    let (status, _) = ctx.get("/checkout").await;
    assert_eq!(status, 200);

    let (status, _) = ctx.post("/checkout/information", INFORMATION).await;
    assert_eq!(status, 200);

    let (status, _) = ctx.post("/checkout/shipping", &[("method", "express")]).await;
    assert_eq!(status, 200);

    let (status, body) = ctx
        .post(
            "/checkout/payment",
            &[
                ("card_number", "4242424242424242"),
                ("card_name", "Layla Haddad"),
                ("expiry", "12/30"),
                ("cvv", "123"),
            ],
        )
        .await;
    assert_eq!(status, 200);
    assert!(body.contains("Thank you for your order!"));
    assert!(body.contains("layla@example.com"));
    assert_eq!(ctx.cart_count().await, 0);

    // An empty cart sends the visitor back to the cart page
    let resp = ctx.client.get(ctx.url("/checkout")).send().await.unwrap();
    assert_eq!(resp.url().path(), "/cart");
}

#[tokio::test]
async fn test_invalid_information_is_rejected() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post("/checkout/information", &[("email", "not-an-email")])
        .await;
    assert_eq!(status, 422);
    assert!(body.contains("not-an-email"));
}

#[tokio::test]
async fn test_steps_cannot_be_skipped() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/checkout/payment"))
        .form(&[("card_number", "4242")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.url().path(), "/checkout");

    let (status, _) = ctx.post("/checkout/step/7", &[]).await;
    assert_eq!(status, 404);
}
