//! Session-related types.
//!
//! Everything a visitor carries between requests lives in the session: the
//! cart, the chosen locale, the checkout wizard and the last placed order.

use souq_core::cart::Cart;
use souq_core::checkout::{CheckoutForm, OrderConfirmation};
use souq_core::locale::Locale;
use tower_sessions::Session;

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the locale chosen with the language toggle.
    pub const LOCALE: &str = "locale";

    /// Key for checkout wizard progress.
    pub const CHECKOUT: &str = "checkout";

    /// Key for the confirmation of the most recent order.
    pub const LAST_ORDER: &str = "last_order";
}

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Load the cart. A visitor without one starts with the demo cart.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_cart(session: &Session) -> SessionResult<Cart> {
    Ok(session
        .get::<Cart>(keys::CART)
        .await?
        .unwrap_or_else(Cart::sample))
}

/// Store the cart.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_cart(session: &Session, cart: &Cart) -> SessionResult<()> {
    session.insert(keys::CART, cart).await
}

/// The locale stored by the language toggle, if any.
///
/// A value that no longer parses is ignored.
pub async fn stored_locale(session: &Session) -> Option<Locale> {
    match session.get::<Locale>(keys::LOCALE).await {
        Ok(locale) => locale,
        Err(e) => {
            tracing::warn!("Failed to read locale from session: {e}");
            None
        }
    }
}

/// Store the locale.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_locale(session: &Session, locale: Locale) -> SessionResult<()> {
    session.insert(keys::LOCALE, locale).await
}

/// Load checkout progress, starting at step 1 when there is none.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_checkout(session: &Session) -> SessionResult<CheckoutForm> {
    Ok(session
        .get::<CheckoutForm>(keys::CHECKOUT)
        .await?
        .unwrap_or_default())
}

/// Store checkout progress.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_checkout(session: &Session, form: &CheckoutForm) -> SessionResult<()> {
    session.insert(keys::CHECKOUT, form).await
}

/// Record a placed order and reset the cart and checkout wizard.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn complete_order(session: &Session, order: &OrderConfirmation) -> SessionResult<()> {
    let mut cart = load_cart(session).await?;
    cart.clear();
    save_cart(session, &cart).await?;
    session.remove::<CheckoutForm>(keys::CHECKOUT).await?;
    session.insert(keys::LAST_ORDER, order).await
}

/// The confirmation of the most recent order.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn last_order(session: &Session) -> SessionResult<Option<OrderConfirmation>> {
    session.get::<OrderConfirmation>(keys::LAST_ORDER).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use souq_core::checkout::OrderTotals;
    use souq_core::types::Price;
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_new_visitor_gets_demo_cart() {
        let session = session();
        let cart = load_cart(&session).await.unwrap();
        assert_eq!(cart, Cart::sample());
    }

    #[tokio::test]
    async fn test_cart_round_trips_through_session() {
        let session = session();
        let mut cart = load_cart(&session).await.unwrap();
        cart.clear();
        save_cart(&session, &cart).await.unwrap();

        assert!(load_cart(&session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_locale_storage() {
        let session = session();
        assert_eq!(stored_locale(&session).await, None);
        save_locale(&session, Locale::En).await.unwrap();
        assert_eq!(stored_locale(&session).await, Some(Locale::En));
    }

    #[tokio::test]
    async fn test_complete_order_resets_visitor_state() {
        let session = session();
        let mut form = load_checkout(&session).await.unwrap();
        form.submit_shipping(souq_core::checkout::ShippingMethod::Express);
        save_checkout(&session, &form).await.unwrap();

        let order = OrderConfirmation {
            number: "SQ-000001".to_string(),
            email: "a@b.co".to_string(),
            totals: OrderTotals::compute(Price::zero(), form.shipping_method),
            item_count: 2,
        };
        complete_order(&session, &order).await.unwrap();

        assert!(load_cart(&session).await.unwrap().is_empty());
        assert_eq!(load_checkout(&session).await.unwrap(), CheckoutForm::default());
        assert_eq!(last_order(&session).await.unwrap(), Some(order));
    }
}
