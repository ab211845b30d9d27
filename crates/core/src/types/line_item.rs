//! A single cart or wishlist line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product reference as stored in the cart or wishlist.
///
/// `price` and `thumbnail` are copied from the catalog at insertion time;
/// they are point-in-time snapshots, not live references. `quantity` is
/// meaningful in the cart collection; wishlist entries carry it through
/// unchanged.
///
/// The serde field names match the persisted layout exactly:
/// `id, title, price, thumbnail, quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable product identifier, unique within a collection.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price snapshot (non-negative).
    pub price: Decimal,
    /// Optional image URI snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Positive quantity; a missing field means 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// Create a line item with quantity 1 and no thumbnail.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            thumbnail: None,
            quantity: 1,
        }
    }

    /// Line total as `price * quantity`.
    ///
    /// Simple multiplication only; no currency or discount math.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
