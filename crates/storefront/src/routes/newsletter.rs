//! Newsletter signup route handler.
//!
//! Nothing is stored: a valid signup is logged and acknowledged. The
//! response is a fragment that replaces the form when submitted by script,
//! and a plain page body otherwise.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use souq_core::Email;
use tracing::instrument;

use crate::views::Page;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Success fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/newsletter_success.html")]
pub struct SubscribeSuccessTemplate {
    pub message: String,
}

/// Error fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/newsletter_error.html")]
pub struct SubscribeErrorTemplate {
    pub message: String,
    /// Submitted value, kept in the retry form.
    pub email: String,
    pub placeholder: String,
    pub cta: String,
}

/// Parse a signup address. The domain must have a dot.
fn parse_signup(input: &str) -> Option<Email> {
    Email::parse_mail_domain(input)
        .inspect_err(|e| tracing::debug!("Newsletter signup rejected: {e}"))
        .ok()
}

/// Subscribe to the newsletter.
#[instrument(skip(page, form))]
pub async fn subscribe(page: Page, Form(form): Form<SubscribeForm>) -> Response {
    let Some(email) = parse_signup(&form.email) else {
        return (
            StatusCode::BAD_REQUEST,
            SubscribeErrorTemplate {
                message: page.t("newsletter.invalid"),
                email: form.email.trim().to_string(),
                placeholder: page.t("newsletter.placeholder"),
                cta: page.t("newsletter.cta"),
            },
        )
            .into_response();
    };

    tracing::info!(domain = %email.domain(), "Newsletter subscription");
    SubscribeSuccessTemplate {
        message: page
            .translator()
            .t_with("newsletter.thanks", &[("email", email.as_str())]),
    }
    .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signup() {
        assert!(parse_signup("test@example.com").is_some());
        assert!(parse_signup(" User.Name@Domain.co.uk ").is_some());
        assert_eq!(
            parse_signup("MiXed@Example.com").unwrap().as_str(),
            "mixed@example.com"
        );

        assert!(parse_signup("").is_none());
        assert!(parse_signup("@").is_none());
        assert!(parse_signup("test@").is_none());
        assert!(parse_signup("@example.com").is_none());
        assert!(parse_signup("test@domain").is_none());
        assert!(parse_signup("test@domain.").is_none());
        assert!(parse_signup("test").is_none());
    }
}
