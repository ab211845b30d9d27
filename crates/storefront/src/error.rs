//! Unified error handling for the storefront runtime.
//!
//! Each module defines its own `thiserror` enum; `AppError` is the
//! umbrella used by the composition root. None of these errors is fatal to
//! the cart store: persistence and sync failures are logged and swallowed
//! at their call sites, and the store always remains in a valid state.

use thiserror::Error;

use crate::cart::SyncError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Session storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Remote cart sync failed.
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config(ConfigError::MissingEnvVar("CATALOG_BASE_URL".to_string()));
        assert_eq!(
            err.to_string(),
            "Config error: Missing environment variable: CATALOG_BASE_URL"
        );
    }
}
