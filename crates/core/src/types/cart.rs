//! Cart state: the two ordered collections and their invariants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::line_item::LineItem;

/// The complete per-session cart state.
///
/// Both collections are ordered (insertion order = display order) and
/// unique by product id. Membership is independent: a product may be in
/// the cart, the wishlist, both, or neither.
///
/// A `CartState` is only mutated through [`apply`](CartState::apply); no
/// consumer touches the collections directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    /// Cart line items, each with `quantity >= 1`.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Wishlist entries.
    #[serde(default)]
    pub wishlist: Vec<LineItem>,
}

impl CartState {
    /// An empty cart, as created at session start.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            wishlist: Vec::new(),
        }
    }

    /// True when both collections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.wishlist.is_empty()
    }

    /// Total number of units in the cart (sum of quantities).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|it| u64::from(it.quantity)).sum()
    }

    /// Cart subtotal as `sum(price * quantity)`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the cart contains a line with this id.
    #[must_use]
    pub fn contains_item(&self, id: ProductId) -> bool {
        self.items.iter().any(|it| it.id == id)
    }

    /// Whether the wishlist contains an entry with this id.
    #[must_use]
    pub fn contains_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|it| it.id == id)
    }

    /// Restore the entity invariants on untrusted input.
    ///
    /// Applied to wholesale replacements (rehydration, remote payloads):
    /// duplicate ids keep their first occurrence, and lines whose quantity
    /// is zero are dropped. Order is otherwise preserved.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            items: sanitize_collection(self.items),
            wishlist: sanitize_collection(self.wishlist),
        }
    }
}

fn sanitize_collection(lines: Vec<LineItem>) -> Vec<LineItem> {
    let mut seen: Vec<ProductId> = Vec::with_capacity(lines.len());
    lines
        .into_iter()
        .filter(|line| {
            if line.quantity == 0 || seen.contains(&line.id) {
                return false;
            }
            seen.push(line.id);
            true
        })
        .collect()
}

/// Partial state pushed by a remote cart endpoint.
///
/// A field that is absent leaves the corresponding collection unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<Vec<LineItem>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: i64, price: i64, quantity: u32) -> LineItem {
        let mut item = LineItem::new(ProductId::new(id), format!("item-{id}"), Decimal::new(price, 0));
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert_eq!(state.item_count(), 0);
        assert_eq!(state.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_item_count_and_subtotal() {
        let state = CartState {
            items: vec![line(1, 10, 2), line(2, 5, 3)],
            wishlist: vec![line(3, 99, 1)],
        };
        assert_eq!(state.item_count(), 5);
        assert_eq!(state.subtotal(), Decimal::new(35, 0));
    }

    #[test]
    fn test_sanitized_drops_duplicates_and_zero_quantities() {
        let state = CartState {
            items: vec![line(1, 10, 2), line(1, 10, 5), line(2, 5, 0)],
            wishlist: vec![line(3, 7, 1), line(3, 7, 1)],
        };
        let clean = state.sanitized();
        assert_eq!(clean.items, vec![line(1, 10, 2)]);
        assert_eq!(clean.wishlist, vec![line(3, 7, 1)]);
    }

    #[test]
    fn test_state_serde_defaults() {
        let state: CartState = serde_json::from_str("{}").unwrap();
        assert!(state.is_empty());

        let payload: RemotePayload = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert_eq!(payload.items, Some(vec![]));
        assert_eq!(payload.wishlist, None);
    }
}
