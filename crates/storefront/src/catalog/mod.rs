//! Read-only product catalog client.
//!
//! Uses `reqwest` for HTTP and caches responses with `moka` (5-minute
//! TTL). The catalog is an external collaborator: a fetch failure never
//! affects the cart store, and callers substitute an empty result set.

mod cache;
mod filter;
mod types;

use std::sync::Arc;
use std::time::Duration;

use red_lantern_core::ProductId;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogConfig;

use cache::CacheValue;
pub use filter::{ProductFilter, SortOption, filter_and_sort};
pub use types::{Product, ProductDetail, ProductPage};

/// Catalog cache capacity.
const CACHE_CAPACITY: u64 = 1000;

/// Catalog cache time-to-live (5 minutes).
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Catalog API failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    /// The response body was not well-formed.
    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested product does not exist.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The configured base URL cannot be extended with a path.
    #[error("Invalid catalog URL")]
    InvalidUrl,
}

/// Client for the remote product catalog.
///
/// Provides the paginated product list and single-product fetch. Listing
/// responses are truncated to the configured page size; both reads are
/// cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    page_size: u32,
    cache: moka::future::Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = moka::future::Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                page_size: config.page_size,
                cache,
            }),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        // Read as text first for better diagnostics on parse failure
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Fetch the product listing, truncated to the configured page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    /// Callers substitute an empty result set; the cart store is
    /// unaffected either way.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let mut url = self.endpoint(&["products"])?;
        url.query_pairs_mut()
            .append_pair("limit", &self.inner.page_size.to_string());

        let page: ProductPage = self.fetch_json(url).await?;
        let mut products = page.products;
        products.truncate(self.inner.page_size as usize);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for an unknown id, or another
    /// `CatalogError` if the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: ProductId) -> Result<ProductDetail, CatalogError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Detail(detail)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*detail);
        }

        let url = self.endpoint(&["products", &id.to_string()])?;
        let detail: ProductDetail = match self.fetch_json(url).await {
            Ok(detail) => detail,
            Err(CatalogError::Status(status)) if status == StatusCode::NOT_FOUND => {
                return Err(CatalogError::NotFound(id));
            }
            Err(e) => return Err(e),
        };

        self.inner
            .cache
            .insert(cache_key, CacheValue::Detail(Box::new(detail.clone())))
            .await;

        Ok(detail)
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("page_size", &self.inner.page_size)
            .finish_non_exhaustive()
    }
}
