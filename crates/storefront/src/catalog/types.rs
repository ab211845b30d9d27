//! Domain types for the product catalog API.
//!
//! These mirror the catalog's JSON payloads (camelCase on the wire) and
//! provide `line_item()` conversions that take the point-in-time snapshot
//! stored in the cart.

use red_lantern_core::{LineItem, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Current unit price.
    pub price: Decimal,
    /// Average rating, when the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Product {
    /// Snapshot this product as a cart/wishlist line with quantity 1.
    ///
    /// Price and thumbnail are copied now and not re-derived if the
    /// catalog changes later.
    #[must_use]
    pub fn line_item(&self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            thumbnail: self.thumbnail.clone(),
            quantity: 1,
        }
    }
}

/// A product as returned by the single-product endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Current discount percentage, when on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
}

impl ProductDetail {
    /// Snapshot this product as a cart/wishlist line with quantity 1.
    #[must_use]
    pub fn line_item(&self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            thumbnail: self.thumbnail.clone(),
            quantity: 1,
        }
    }

    /// The listing-level view of this product.
    #[must_use]
    pub fn summary(&self) -> Product {
        Product {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            rating: self.rating,
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// Envelope of the paginated listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    /// Products in this page.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Total products in the catalog.
    #[serde(default)]
    pub total: u64,
}
