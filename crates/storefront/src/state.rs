//! Application state shared across all consumers.

use std::sync::Arc;

use crate::cart::{CartPersistence, CartStore, CartSync};
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::notify::ToastHub;
use crate::storage::{FileStore, MemoryStore, SessionStore};

/// Application state: the composition root's single wiring point.
///
/// Constructed once at startup and handed to consumers explicitly - there
/// is no ambient global. Cheaply cloneable via `Arc`; every clone shares
/// the same cart store, catalog client, and toast hub.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
    sync: Option<CartSync>,
    toasts: ToastHub,
}

impl AppState {
    /// Wire up the application from configuration.
    ///
    /// Session storage is file-backed under `data_dir` when configured,
    /// in-memory otherwise. The cart store rehydrates its persisted blob
    /// here, before any command is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file-backed storage directory cannot be
    /// created.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let backend: Arc<dyn SessionStore> = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::open(dir.clone())?),
            None => Arc::new(MemoryStore::new()),
        };

        let cart = CartStore::open(CartPersistence::new(backend));
        let catalog = CatalogClient::new(&config.catalog);
        let sync = config.sync.as_ref().map(CartSync::new);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                sync,
                toasts: ToastHub::new(),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the session cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get the remote sync client, if sync is configured.
    ///
    /// Sync is strictly manual: nothing in the runtime invokes it
    /// automatically.
    #[must_use]
    pub fn sync(&self) -> Option<&CartSync> {
        self.inner.sync.as_ref()
    }

    /// Get a reference to the toast hub.
    #[must_use]
    pub fn toasts(&self) -> &ToastHub {
        &self.inner.toasts
    }
}
