//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (?slide=n selects the hero slide)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /shop                   - Listing (?category, price, q, sort, page, view)
//! GET  /product/{slug}         - Product detail (?image, qty, tab)
//!
//! # Cart (form posts redirect back to `return_to`)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a product variant
//! POST /cart/update            - Increment, decrement or set a line quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! POST /cart/note              - Save the order note
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Wizard at the current step
//! POST /checkout/information   - Step 1
//! POST /checkout/shipping      - Step 2
//! POST /checkout/payment       - Step 3, places the order
//! POST /checkout/step/{n}      - Jump back to a completed step
//! GET  /checkout/complete      - Order confirmation
//!
//! # Layout
//! GET  /drawers/{kind}         - Drawer markup alone (fragment)
//! POST /locale                 - Switch language
//! POST /newsletter             - Newsletter signup (fragment)
//! ```

pub mod cart;
pub mod checkout;
pub mod drawers;
pub mod home;
pub mod locale;
pub mod newsletter;
pub mod products;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/note", post(cart::note))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/information", post(checkout::information))
        .route("/shipping", post(checkout::shipping))
        .route("/payment", post(checkout::payment))
        .route("/step/{number}", post(checkout::jump))
        .route("/complete", get(checkout::complete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/shop", get(shop::index))
        .route("/product/{slug}", get(products::show))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/drawers/{kind}", get(drawers::show))
        .route("/locale", post(locale::switch))
        .route("/newsletter", post(newsletter::subscribe))
}
