//! Cart route handlers.
//!
//! The cart lives in the session. Every mutation is a form POST that
//! redirects back to `return_to` (a local path) or to `/cart`, so the page
//! and the cart drawer always render the same cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use souq_core::ProductId;
use souq_core::cart::{CartLine, Quantity};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session;
use crate::state::AppState;
use crate::views::query::safe_return_to;
use crate::views::{CartView, Page};

/// Longest order note kept in the session.
const MAX_NOTE_LEN: usize = 500;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: i32,
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub return_to: Option<String>,
}

/// Quantity stepper action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateAction {
    Increment,
    Decrement,
    Set,
}

/// Update cart line form data.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub index: usize,
    pub action: UpdateAction,
    /// Required for `set`.
    pub quantity: Option<u32>,
    pub return_to: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub index: usize,
    pub return_to: Option<String>,
}

/// Forms that only carry a redirect target.
#[derive(Debug, Deserialize)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

/// Order note form data.
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub note: String,
    pub return_to: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/cart.html")]
pub struct CartTemplate {
    pub page: Page,
    pub cart: CartView,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: u32,
}

fn back(return_to: Option<&str>) -> Redirect {
    Redirect::to(safe_return_to(return_to, "/cart"))
}

/// Blank form values mean "no choice".
fn choice(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Display the cart page.
#[instrument(skip(state, page, session))]
pub async fn show(
    State(state): State<AppState>,
    page: Page,
    session: Session,
) -> Result<CartTemplate> {
    let cart = session::load_cart(&session).await?;
    Ok(CartTemplate {
        cart: CartView::new(&cart, state.catalog(), page.translator()),
        page,
    })
}

/// Add a product to the cart.
///
/// Adding a variant already in the cart raises that line's quantity.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .product_by_id(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    if !product.availability.is_purchasable() {
        return Err(AppError::BadRequest(format!("{} is out of stock", product.name)));
    }

    let size = choice(form.size);
    if let Some(size) = &size
        && !product.sizes.contains(size)
    {
        return Err(AppError::BadRequest(format!("unknown size {size}")));
    }
    let color = choice(form.color);
    if let Some(color) = &color
        && !product.colors.iter().any(|c| c.name == *color)
    {
        return Err(AppError::BadRequest(format!("unknown color {color}")));
    }

    let quantity = Quantity::new(form.quantity.unwrap_or(1))?;
    let mut cart = session::load_cart(&session).await?;
    cart.add(CartLine::new(product_id, quantity, size, color))?;
    session::save_cart(&session, &cart).await?;

    let id = product_id.to_string();
    let count = quantity.get().to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        &[("product_id", id.as_str()), ("quantity", count.as_str())],
    );
    tracing::info!(%product_id, quantity = quantity.get(), "Added to cart");

    Ok(back(form.return_to.as_deref()))
}

/// Change a line quantity.
///
/// Decrement stops at 1; removing a line is a separate action.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;

    match form.action {
        UpdateAction::Increment => {
            cart.increment(form.index)?;
        }
        UpdateAction::Decrement => {
            cart.decrement(form.index)?;
        }
        UpdateAction::Set => {
            let quantity = form
                .quantity
                .ok_or_else(|| AppError::BadRequest("missing quantity".to_string()))?;
            cart.set_quantity(form.index, quantity)?;
        }
    }

    session::save_cart(&session, &cart).await?;
    Ok(back(form.return_to.as_deref()))
}

/// Remove a line.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;
    let removed = cart.remove(form.index)?;
    session::save_cart(&session, &cart).await?;

    tracing::info!(product_id = %removed.product_id, "Removed from cart");
    Ok(back(form.return_to.as_deref()))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session, Form(form): Form<ReturnForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;
    cart.clear();
    session::save_cart(&session, &cart).await?;
    Ok(back(form.return_to.as_deref()))
}

/// Save the order note.
#[instrument(skip(session, form))]
pub async fn note(session: Session, Form(form): Form<NoteForm>) -> Result<Redirect> {
    let mut cart = session::load_cart(&session).await?;
    cart.note = form.note.trim().chars().take(MAX_NOTE_LEN).collect();
    session::save_cart(&session, &cart).await?;
    Ok(back(form.return_to.as_deref()))
}

/// Cart count badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = session::load_cart(&session).await?;
    Ok(CartCountTemplate {
        cart_count: cart.item_count(),
    })
}
