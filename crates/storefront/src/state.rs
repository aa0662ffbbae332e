//! Application state shared across handlers.

use std::sync::Arc;

use chrono::Utc;
use souq_core::catalog::{Catalog, CatalogError};
use souq_core::countdown::Deal;

use crate::config::StorefrontConfig;
use crate::i18n::{I18nError, Translations};

/// Catalog dataset compiled into the binary.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("translation error: {0}")]
    I18n(#[from] I18nError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything in it is
/// read-only after startup; per-visitor state lives in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    translations: Arc<Translations>,
    deal: Deal,
}

impl AppState {
    /// Create the application state from the embedded catalog and
    /// translation tables.
    ///
    /// The deal of the day starts counting down now.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog or a translation table is
    /// invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let catalog = Catalog::from_json(CATALOG_JSON)?;
        Self::with_catalog(config, catalog)
    }

    /// Create the application state around an explicit catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if a translation table is invalid.
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Result<Self, StateError> {
        let translations = Arc::new(Translations::from_embedded()?);
        let deal = Deal::starting_at(Utc::now(), config.deal_duration_hours);

        tracing::info!(
            products = catalog.products().len(),
            categories = catalog.categories().len(),
            deal_ends_at = %deal.ends_at(),
            "Storefront state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                translations,
                deal,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Shared translation tables.
    #[must_use]
    pub fn translations(&self) -> Arc<Translations> {
        Arc::clone(&self.inner.translations)
    }

    #[must_use]
    pub fn deal(&self) -> &Deal {
        &self.inner.deal
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let state = AppState::new(StorefrontConfig::default()).unwrap();
        assert_eq!(state.catalog().products().len(), 12);
        assert_eq!(state.catalog().categories().len(), 6);
        assert!(state.catalog().product_by_slug("premium-leather-jacket").is_some());
    }
}
