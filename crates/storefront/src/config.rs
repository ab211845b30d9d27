//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_BASE_URL` - Product catalog base URL (default: <https://dummyjson.com>)
//! - `CATALOG_PAGE_SIZE` - Listing page size (default: 24)
//! - `STOREFRONT_DATA_DIR` - Directory for file-backed session storage;
//!   when unset the session store is in-memory only
//! - `CART_SYNC_ENDPOINT` - Remote cart sync endpoint URL; sync is
//!   disabled when unset
//! - `CART_SYNC_TOKEN` - Bearer token for the sync endpoint

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default product catalog (the public dummyjson API).
const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";

/// Default number of products fetched per listing-page load.
const DEFAULT_PAGE_SIZE: u32 = 24;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Product catalog configuration.
    pub catalog: CatalogConfig,
    /// Directory for file-backed session storage, if any.
    pub data_dir: Option<PathBuf>,
    /// Remote cart sync configuration; `None` disables sync entirely.
    pub sync: Option<SyncConfig>,
}

/// Read-only product catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL.
    pub base_url: Url,
    /// Listing page size; listing responses are truncated to this bound.
    pub page_size: u32,
}

/// Remote cart sync endpoint configuration.
///
/// Implements `Debug` manually to redact the bearer token.
#[derive(Clone)]
pub struct SyncConfig {
    /// Full URL of the remote cart endpoint.
    pub endpoint: Url,
    /// Optional bearer token sent on pull and push.
    pub token: Option<SecretString>,
}

impl std::fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable that is present fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = CatalogConfig::from_env()?;
        let data_dir = get_optional_env("STOREFRONT_DATA_DIR").map(PathBuf::from);
        let sync = SyncConfig::from_env()?;

        Ok(Self {
            catalog,
            data_dir,
            sync,
        })
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), e.to_string()))?;
        let page_size = match get_optional_env("CATALOG_PAGE_SIZE") {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_PAGE_SIZE".to_string(), e.to_string())
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            base_url,
            page_size,
        })
    }
}

impl SyncConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(raw) = get_optional_env("CART_SYNC_ENDPOINT") else {
            return Ok(None);
        };
        let endpoint = raw.parse::<Url>().map_err(|e| {
            ConfigError::InvalidEnvVar("CART_SYNC_ENDPOINT".to_string(), e.to_string())
        })?;
        let token = get_optional_env("CART_SYNC_TOKEN").map(SecretString::from);

        Ok(Some(Self { endpoint, token }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
