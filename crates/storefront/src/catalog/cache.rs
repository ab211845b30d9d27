//! Cache types for catalog API responses.

use super::types::{Product, ProductDetail};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Vec<Product>),
    Detail(Box<ProductDetail>),
}
