//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why a submitted address was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {0} characters")]
    TooLong(usize),
    #[error("email cannot contain whitespace")]
    Whitespace,
    /// Not exactly one `@` with something on both sides.
    #[error("email must look like name@domain")]
    Malformed,
    /// Domain without a dot, or with an empty label (`a@.com`, `a@b.`).
    #[error("email domain '{0}' is not a mail domain")]
    Domain(String),
}

/// An email address typed into a storefront form.
///
/// Input is trimmed and lowercased, so two spellings of the same address
/// compare equal. [`Email::parse`] checks shape only; newsletter signups
/// additionally require a dotted domain via [`Email::parse_mail_domain`].
///
/// ```
/// use souq_core::Email;
///
/// let email = Email::parse("  Layla@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "layla@example.com");
/// assert!(Email::parse("a@b@c").is_err());
/// assert!(Email::parse_mail_domain("a@localhost").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// RFC 5321 path limit.
    pub const MAX_LENGTH: usize = 254;

    /// Parse and normalize an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Email::MAX_LENGTH`], contains whitespace, or is not `local@domain`.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong(Self::MAX_LENGTH));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        match s.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(s.to_lowercase()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// Parse an address whose domain has at least two non-empty labels.
    ///
    /// # Errors
    ///
    /// Everything [`Email::parse`] rejects, plus [`EmailError::Domain`].
    pub fn parse_mail_domain(input: &str) -> Result<Self, EmailError> {
        let email = Self::parse(input)?;
        let domain = email.domain();
        if domain.contains('.') && domain.split('.').all(|label| !label.is_empty()) {
            Ok(email)
        } else {
            Err(EmailError::Domain(domain.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let email = Email::parse("  Shopper@Souq.Test \n").unwrap();
        assert_eq!(email.as_str(), "shopper@souq.test");
        assert_eq!(email.domain(), "souq.test");
        assert_eq!(email, Email::parse("shopper@souq.test").unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
        assert_eq!(Email::parse("plain"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("a@b@c"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("@souq.test"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("user@"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("us er@x.y"), Err(EmailError::Whitespace));

        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::parse(&long), Err(EmailError::TooLong(254)));
    }

    #[test]
    fn test_mail_domain() {
        assert!(Email::parse_mail_domain("user+tag@example.co.uk").is_ok());
        assert!(Email::parse_mail_domain("a@b.c").is_ok());

        // Fine for checkout, not for the mailing list
        assert!(Email::parse("user@localhost").is_ok());
        for bad in ["user@localhost", "user@.com", "user@souq.", "user@a..b"] {
            assert!(
                matches!(Email::parse_mail_domain(bad), Err(EmailError::Domain(_))),
                "{bad}"
            );
        }
    }
}
