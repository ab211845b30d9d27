//! Serialization of the cart state to session-scoped storage.

use std::sync::Arc;

use red_lantern_core::CartState;
use tracing::{debug, warn};

use crate::storage::SessionStore;

/// Fixed, versioned storage key for the persisted cart blob.
pub const CART_STORAGE_KEY: &str = "cart.v1";

/// Persists the cart state blob to a [`SessionStore`].
///
/// Persistence is best-effort: write failures are logged and swallowed,
/// and unreadable or corrupt blobs load as absent. The store falls back to
/// the default empty state either way.
#[derive(Clone)]
pub struct CartPersistence {
    backend: Arc<dyn SessionStore>,
}

impl CartPersistence {
    /// Create a persistence adapter over a storage backend.
    #[must_use]
    pub fn new(backend: Arc<dyn SessionStore>) -> Self {
        Self { backend }
    }

    /// Load the persisted state, if a readable one exists.
    ///
    /// Absent key, read failure, and parse failure all yield `None`.
    #[must_use]
    pub fn load(&self) -> Option<CartState> {
        let bytes = match self.backend.get(CART_STORAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(key = CART_STORAGE_KEY, "No persisted cart state");
                return None;
            }
            Err(e) => {
                warn!(key = CART_STORAGE_KEY, error = %e, "Failed to read persisted cart state");
                return None;
            }
        };

        match serde_json::from_slice::<CartState>(&bytes) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(key = CART_STORAGE_KEY, error = %e, "Discarding corrupt cart state blob");
                None
            }
        }
    }

    /// Write the state blob, swallowing and logging failures.
    pub fn save(&self, state: &CartState) {
        let bytes = match serde_json::to_vec(state) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart state");
                return;
            }
        };

        if let Err(e) = self.backend.put(CART_STORAGE_KEY, bytes) {
            warn!(key = CART_STORAGE_KEY, error = %e, "Failed to save cart state");
        }
    }
}

impl std::fmt::Debug for CartPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartPersistence")
            .field("key", &CART_STORAGE_KEY)
            .finish_non_exhaustive()
    }
}
