//! Translation tables and lookup.
//!
//! Tables are JSON documents embedded at compile time, one per locale. Keys
//! are dotted paths (`cart.title`). A key missing from the active locale is
//! looked up in [`Locale::FALLBACK`], then rendered as the key itself so a
//! gap is visible on the page instead of failing the request.
//!
//! Placeholders use `{{name}}`. Counted strings look for a `<key>_plural`
//! sibling when the count is not one.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use souq_core::locale::{Direction, Locale};
use thiserror::Error;

const EN: &str = include_str!("../locales/en.json");
const AR: &str = include_str!("../locales/ar.json");

/// Errors raised while loading translation tables.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Invalid translation table for '{locale}': {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation table for '{0}' must be a JSON object")]
    NotAnObject(Locale),
}

/// Flattened translation tables for every supported locale.
#[derive(Debug, Default)]
pub struct Translations {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Translations {
    /// Load the tables compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if an embedded table is not a valid JSON object.
    pub fn from_embedded() -> Result<Self, I18nError> {
        let mut translations = Self::default();
        translations.load(Locale::En, EN)?;
        translations.load(Locale::Ar, AR)?;
        Ok(translations)
    }

    /// Parse `json` and register it as the table for `locale`.
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if `json` is not a JSON object.
    pub fn load(&mut self, locale: Locale, json: &str) -> Result<(), I18nError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| I18nError::Parse { locale, source })?;
        if !value.is_object() {
            return Err(I18nError::NotAnObject(locale));
        }

        let mut table = HashMap::new();
        flatten("", &value, &mut table);
        self.tables.insert(locale, table);
        Ok(())
    }

    /// Look up a key, falling back to the fallback locale.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.get(locale, key)
            .or_else(|| self.get(Locale::FALLBACK, key))
    }

    fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(_) | Value::Null | Value::Array(_) => {}
    }
}

/// Translator bound to one request's locale.
#[derive(Debug, Clone)]
pub struct Translator {
    translations: Arc<Translations>,
    locale: Locale,
}

impl Translator {
    #[must_use]
    pub const fn new(translations: Arc<Translations>, locale: Locale) -> Self {
        Self {
            translations,
            locale,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Translate a key. Unknown keys render as themselves.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translations
            .lookup(self.locale, key)
            .unwrap_or(key)
            .to_string()
    }

    /// Translate a key and fill `{{name}}` placeholders.
    #[must_use]
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }

    /// Translate a counted key, preferring `<key>_plural` when `count != 1`.
    #[must_use]
    pub fn t_count(&self, key: &str, count: usize) -> String {
        let plural = format!("{key}_plural");
        let template = if count == 1 {
            self.t(key)
        } else {
            self.translations
                .lookup(self.locale, &plural)
                .map_or_else(|| self.t(key), str::to_string)
        };
        interpolate(&template, &[("count", &count.to_string())])
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn translator(locale: Locale) -> Translator {
        Translator::new(Arc::new(Translations::from_embedded().unwrap()), locale)
    }

    #[test]
    fn test_embedded_tables_load() {
        let en = translator(Locale::En);
        let ar = translator(Locale::Ar);
        assert_eq!(en.t("cart.title"), "Shopping Cart");
        assert_eq!(ar.t("cart.title"), "سلة التسوق");
        assert_eq!(en.t("countries.AE"), "United Arab Emirates");
    }

    #[test]
    fn test_missing_key_falls_back_then_echoes() {
        let mut translations = Translations::default();
        translations.load(Locale::Ar, r#"{"only": {"ar": "عربي"}}"#).unwrap();
        translations.load(Locale::En, "{}").unwrap();
        let en = Translator::new(Arc::new(translations), Locale::En);

        assert_eq!(en.t("only.ar"), "عربي");
        assert_eq!(en.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_interpolation_and_plurals() {
        let en = translator(Locale::En);
        assert_eq!(
            en.t_with("general.search.no_results", &[("query", "zzz")]),
            "No results found for \"zzz\""
        );
        assert_eq!(en.t_count("cart.items_count", 1), "1 item");
        assert_eq!(en.t_count("cart.items_count", 4), "4 items");
        assert_eq!(en.t_count("product.based_on", 3), "Based on 3 reviews");
    }

    #[test]
    fn test_rejects_non_object_table() {
        let mut translations = Translations::default();
        assert!(matches!(
            translations.load(Locale::En, "[1, 2]"),
            Err(I18nError::NotAnObject(Locale::En))
        ));
        assert!(matches!(
            translations.load(Locale::En, "{"),
            Err(I18nError::Parse { .. })
        ));
    }

    #[test]
    fn test_direction_follows_locale() {
        assert!(translator(Locale::Ar).direction().is_rtl());
        assert!(!translator(Locale::En).direction().is_rtl());
    }
}
