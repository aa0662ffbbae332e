//! Checkout wizard route handlers.
//!
//! The wizard state lives in the session. Each step form posts to its own
//! route; validation failures re-render the current step with a 422, and
//! success redirects back to `/checkout` at the next step.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use rand::Rng;
use serde::Deserialize;
use souq_core::cart::Cart;
use souq_core::checkout::{
    CheckoutError, CheckoutForm, CheckoutStep, Country, Information, OrderConfirmation,
    OrderTotals, PaymentDetails, ShippingMethod,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session;
use crate::state::AppState;
use crate::views::{CartView, Page};

/// Step indicator entry.
pub struct StepView {
    pub number: u8,
    pub label: String,
    pub active: bool,
    pub completed: bool,
    /// Completed steps can be revisited.
    pub can_jump: bool,
}

pub struct CountryOption {
    pub code: &'static str,
    pub label: String,
    pub selected: bool,
}

pub struct ShippingOptionView {
    pub value: &'static str,
    pub label: String,
    pub time: String,
    pub price: String,
    pub checked: bool,
}

/// Order summary panel.
pub struct SummaryView {
    pub cart: CartView,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/checkout.html")]
pub struct CheckoutTemplate {
    pub page: Page,
    pub steps: Vec<StepView>,
    /// `information`, `shipping` or `payment`.
    pub step: &'static str,
    pub back_step: Option<u8>,
    pub info: Information,
    pub countries: Vec<CountryOption>,
    pub shipping_options: Vec<ShippingOptionView>,
    pub error: Option<String>,
    pub summary: SummaryView,
    pub place_order_label: String,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/order_complete.html")]
pub struct OrderCompleteTemplate {
    pub page: Page,
    pub message: String,
    pub summary_total: String,
    pub item_count_label: String,
}

/// Shipping step form data.
#[derive(Debug, Deserialize)]
pub struct ShippingForm {
    #[serde(default)]
    pub method: String,
}

const fn step_slug(step: CheckoutStep) -> &'static str {
    match step {
        CheckoutStep::Information => "information",
        CheckoutStep::Shipping => "shipping",
        CheckoutStep::Payment => "payment",
    }
}

fn totals(state: &AppState, cart: &Cart, form: &CheckoutForm) -> OrderTotals {
    OrderTotals::compute(cart.subtotal(state.catalog()), form.shipping_method)
}

fn render(
    state: &AppState,
    page: Page,
    cart: &Cart,
    form: &CheckoutForm,
    error: Option<&CheckoutError>,
) -> CheckoutTemplate {
    let t = page.translator();
    let totals = totals(state, cart, form);
    let free = t.t("cart.free");
    let price_label = |price: souq_core::Price| {
        if price.is_zero() {
            free.clone()
        } else {
            price.display()
        }
    };

    let steps = CheckoutStep::ALL
        .into_iter()
        .map(|step| StepView {
            number: step.number(),
            label: t.t(step.label_key()),
            active: step == form.step,
            completed: step.is_completed(form.step),
            can_jump: form.step.can_jump_to(step),
        })
        .collect();

    let selected_country = form.country();
    let countries = Country::ALL
        .into_iter()
        .map(|country| CountryOption {
            code: country.code(),
            label: t.t(country.label_key()),
            selected: country == selected_country,
        })
        .collect();

    let shipping_options = ShippingMethod::ALL
        .into_iter()
        .map(|method| ShippingOptionView {
            value: method.as_str(),
            label: t.t(method.label_key()),
            time: t.t(method.time_key()),
            price: price_label(method.price()),
            checked: method == form.shipping_method,
        })
        .collect();

    let summary = SummaryView {
        cart: CartView::new(cart, state.catalog(), t),
        subtotal: totals.subtotal.display(),
        shipping: price_label(totals.shipping),
        tax: totals.tax.display(),
        total: totals.total.display(),
    };

    CheckoutTemplate {
        steps,
        step: step_slug(form.step),
        back_step: form.step.previous().map(CheckoutStep::number),
        info: form.information.clone(),
        countries,
        shipping_options,
        error: error.map(|e| t.t_with("checkout.invalid", &[("reason", e.to_string().as_str())])),
        place_order_label: t.t_with(
            "checkout.place_order_with_total",
            &[("total", totals.total.display().as_str())],
        ),
        summary,
        page,
    }
}

fn invalid(template: CheckoutTemplate) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, template).into_response()
}

/// Display the wizard at the current step. An empty cart goes back to `/cart`.
#[instrument(skip(state, page, session))]
pub async fn show(State(state): State<AppState>, page: Page, session: Session) -> Result<Response> {
    let cart = session::load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }
    let form = session::load_checkout(&session).await?;
    Ok(render(&state, page, &cart, &form, None).into_response())
}

/// Step 1: contact and shipping address.
#[instrument(skip(state, page, session, information))]
pub async fn information(
    State(state): State<AppState>,
    page: Page,
    session: Session,
    Form(information): Form<Information>,
) -> Result<Response> {
    let cart = session::load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }
    let mut form = session::load_checkout(&session).await?;

    let result = form.submit_information(information);
    session::save_checkout(&session, &form).await?;
    match result {
        Ok(()) => Ok(Redirect::to("/checkout").into_response()),
        Err(err) => {
            tracing::debug!(error = %err, "Checkout information rejected");
            Ok(invalid(render(&state, page, &cart, &form, Some(&err))))
        }
    }
}

/// Step 2: shipping method.
#[instrument(skip(session))]
pub async fn shipping(session: Session, Form(input): Form<ShippingForm>) -> Result<Redirect> {
    let mut form = session::load_checkout(&session).await?;
    if form.step == CheckoutStep::Information {
        return Ok(Redirect::to("/checkout"));
    }
    let method = ShippingMethod::parse(&input.method)
        .ok_or_else(|| AppError::BadRequest(format!("unknown shipping method {}", input.method)))?;

    form.submit_shipping(method);
    session::save_checkout(&session, &form).await?;
    Ok(Redirect::to("/checkout"))
}

/// Step 3: payment. Places the order; nothing is charged.
#[instrument(skip(state, page, session, payment))]
pub async fn payment(
    State(state): State<AppState>,
    page: Page,
    session: Session,
    Form(payment): Form<PaymentDetails>,
) -> Result<Response> {
    let form = session::load_checkout(&session).await?;
    if form.step != CheckoutStep::Payment {
        return Ok(Redirect::to("/checkout").into_response());
    }
    let cart = session::load_cart(&session).await?;
    let totals = totals(&state, &cart, &form);
    let sequence = rand::rng().random_range(1..1_000_000);

    match OrderConfirmation::place(&form, &payment, totals, cart.item_count(), sequence) {
        Ok(order) => {
            session::complete_order(&session, &order).await?;
            add_breadcrumb("checkout", "Order placed", &[("order", order.number.as_str())]);
            tracing::info!(
                order = %order.number,
                total = %order.totals.total,
                items = order.item_count,
                "Order placed"
            );
            Ok(Redirect::to("/checkout/complete").into_response())
        }
        Err(CheckoutError::EmptyCart) => Ok(Redirect::to("/cart").into_response()),
        Err(err) => {
            tracing::debug!(error = %err, "Payment rejected");
            Ok(invalid(render(&state, page, &cart, &form, Some(&err))))
        }
    }
}

/// Jump back to a completed step from the step indicator.
#[instrument(skip(session))]
pub async fn jump(session: Session, Path(number): Path<u8>) -> Result<Redirect> {
    let target = CheckoutStep::from_number(number)
        .ok_or_else(|| AppError::NotFound(format!("checkout step {number}")))?;
    let mut form = session::load_checkout(&session).await?;
    if form.jump_to(target) {
        session::save_checkout(&session, &form).await?;
    }
    Ok(Redirect::to("/checkout"))
}

/// Order confirmation. Without a placed order, go home.
#[instrument(skip(page, session))]
pub async fn complete(page: Page, session: Session) -> Result<Response> {
    let Some(order) = session::last_order(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };
    let t = page.translator();

    Ok(OrderCompleteTemplate {
        message: t.t_with(
            "checkout.complete.text",
            &[("number", order.number.as_str()), ("email", order.email.as_str())],
        ),
        summary_total: order.totals.total.display(),
        item_count_label: t.t_count("cart.items_count", order.item_count as usize),
        page,
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_slugs() {
        let slugs: Vec<_> = CheckoutStep::ALL.into_iter().map(step_slug).collect();
        assert_eq!(slugs, ["information", "shipping", "payment"]);
    }
}
