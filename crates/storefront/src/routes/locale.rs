//! Language toggle.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use souq_core::locale::Locale;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session;
use crate::views::query::safe_return_to;

/// Language toggle form data.
#[derive(Debug, Deserialize)]
pub struct SwitchForm {
    pub locale: String,
    pub return_to: Option<String>,
}

/// Store the chosen locale and go back to the page it was chosen on.
///
/// The session choice wins over `?lang=` and `Accept-Language` on every
/// later request.
#[instrument(skip(session))]
pub async fn switch(session: Session, Form(form): Form<SwitchForm>) -> Result<Redirect> {
    let locale = Locale::parse(&form.locale)
        .ok_or_else(|| AppError::BadRequest(format!("unsupported locale {}", form.locale)))?;
    session::save_locale(&session, locale).await?;
    tracing::debug!(locale = locale.code(), "Locale switched");

    Ok(Redirect::to(safe_return_to(form.return_to.as_deref(), "/")))
}
