//! Drawer fragments for progressive enhancement.
//!
//! Pages open drawers with `?drawer=<kind>` links. A script may instead
//! fetch `/drawers/<kind>?return_to=<page>` and insert the markup in place.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::http::Uri;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session;
use crate::state::AppState;
use crate::views::drawer::DrawerContext;
use crate::views::query::safe_return_to;
use crate::views::{DrawerKind, DrawerView, Page, QueryParams};

/// The drawer markup alone.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/drawer.html")]
pub struct DrawerFragmentTemplate {
    pub page: Page,
}

/// Render one drawer. Unknown kinds are a 404.
#[instrument(skip(state, page, session, uri))]
pub async fn show(
    State(state): State<AppState>,
    mut page: Page,
    session: Session,
    Path(kind): Path<String>,
    uri: Uri,
) -> Result<DrawerFragmentTemplate> {
    let kind =
        DrawerKind::parse(&kind).ok_or_else(|| AppError::NotFound(format!("drawer {kind}")))?;
    let params = QueryParams::from_uri(&uri);
    let close_href = safe_return_to(params.get("return_to"), "/");
    let cart = session::load_cart(&session).await?;

    let drawer = DrawerView::build(
        kind,
        &DrawerContext {
            catalog: state.catalog(),
            translator: page.translator(),
            cart: &cart,
            params: &params,
            direction: page.locale().direction(),
            close_href,
        },
    );
    page.drawer = Some(drawer);

    Ok(DrawerFragmentTemplate { page })
}
