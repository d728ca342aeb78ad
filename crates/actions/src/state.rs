//! Application state shared across handlers.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ActionsConfig;
use crate::resolver::{CatalogTerms, ItemResolver, TermsError};
use crate::services::{NormalizerClient, ServiceError};
use crate::store::{InventoryStore, OrderStore};

/// Errors that can occur while building the application state.
#[derive(Debug, Error)]
pub enum StateError {
    /// The resolver vocabulary file could not be loaded.
    #[error("terms config error: {0}")]
    Terms(#[from] TermsError),

    /// A service client could not be constructed.
    #[error("service client error: {0}")]
    Service(#[from] ServiceError),
}

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ActionsConfig,
    orders: OrderStore,
    inventory: InventoryStore,
    resolver: ItemResolver,
    normalizer: Option<NormalizerClient>,
}

impl AppState {
    /// Build the state from configuration: stores over the configured data
    /// files, the resolver vocabulary from file (or the built-in default),
    /// and the normalizer client when a URL is configured.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the vocabulary file or a service client
    /// fails to load.
    pub fn new(config: ActionsConfig) -> Result<Self, StateError> {
        let terms = match &config.terms_path {
            Some(path) => CatalogTerms::from_file(path)?,
            None => CatalogTerms::default(),
        };

        let normalizer = config
            .normalizer_url
            .as_deref()
            .map(NormalizerClient::new)
            .transpose()?;

        let orders = OrderStore::new(&config.orders_path);
        let inventory = InventoryStore::new(&config.inventory_path);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                inventory,
                resolver: ItemResolver::new(terms),
                normalizer,
            }),
        })
    }

    /// Server configuration.
    #[must_use]
    pub fn config(&self) -> &ActionsConfig {
        &self.inner.config
    }

    /// The orders store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// The inventory store.
    #[must_use]
    pub fn inventory(&self) -> &InventoryStore {
        &self.inner.inventory
    }

    /// The item resolver.
    #[must_use]
    pub fn resolver(&self) -> &ItemResolver {
        &self.inner.resolver
    }

    /// The normalizer client, if configured.
    #[must_use]
    pub fn normalizer(&self) -> Option<&NormalizerClient> {
        self.inner.normalizer.as_ref()
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn state_builds_with_default_terms() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActionsConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            orders_path: dir.path().join("orders.csv"),
            inventory_path: dir.path().join("inventory.csv"),
            terms_path: None,
            normalizer_url: None,
            classifier_url: None,
        };

        let state = AppState::new(config).unwrap();
        assert!(state.normalizer().is_none());
        assert!(!state.resolver().terms().item_aliases.is_empty());
    }

    #[test]
    fn state_fails_on_unreadable_terms_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ActionsConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            orders_path: dir.path().join("orders.csv"),
            inventory_path: dir.path().join("inventory.csv"),
            terms_path: Some(dir.path().join("missing.yaml")),
            normalizer_url: None,
            classifier_url: None,
        };

        assert!(matches!(
            AppState::new(config),
            Err(StateError::Terms(TermsError::Io { .. }))
        ));
    }
}
